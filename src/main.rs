#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod firmware {
    use defmt::*;

    use embassy_executor::Spawner;
    use embassy_rp::gpio::Output;
    use embassy_time::Timer;

    use {defmt_rtt as _, panic_probe as _};

    use tank_temp_rs::glyph::{self, DEGREE};
    use tank_temp_rs::relay::{RelayRole, RelayState, RELAY_PINS};
    use tank_temp_rs::tank::Tank;
    use tank_temp_rs::{validate, CHILLER_OFFSET, PID_GAINS, STATUS_LOG_INTERVAL};

    // GPIOs handed to Output::new below, in the same order.
    const BOARD_RELAY_GPIO: [u8; 8] = [22, 23, 24, 25, 26, 27, 28, 29];

    const _: () = {
        let mut i = 0;
        while i < RELAY_PINS.len() {
            core::assert!(RELAY_PINS[i] == BOARD_RELAY_GPIO[i], "relay pin wiring mismatch");
            i += 1;
        }
    };

    #[embassy_executor::main]
    async fn main(_spawner: Spawner) {
        info!("Program start");

        if let Err(e) = validate::validate() {
            defmt::panic!("invalid settings: {}", e);
        }

        let p = embassy_rp::init(Default::default());

        // Everything starts switched off until a controller takes over
        let mut relays = [
            Output::new(p.PIN_22, RelayState::Off.into()),
            Output::new(p.PIN_23, RelayState::Off.into()),
            Output::new(p.PIN_24, RelayState::Off.into()),
            Output::new(p.PIN_25, RelayState::Off.into()),
            Output::new(p.PIN_26, RelayState::Off.into()),
            Output::new(p.PIN_27, RelayState::Off.into()),
            Output::new(p.PIN_28, RelayState::Off.into()),
            Output::new(p.PIN_29, RelayState::Off.into()),
        ];

        for tank in Tank::ALL {
            let config = tank.config();
            info!(
                "T{}: start {} C, correction {} C, sensor #{}, heater pin {}, chiller pin {}",
                tank.number(),
                config.start_temp,
                config.temp_correction,
                config.sensor_index,
                config.relay_pin(RelayRole::Heater),
                config.relay_pin(RelayRole::Chiller),
            );
        }
        info!("chiller offset = {} C, pid = {}", CHILLER_OFFSET, PID_GAINS);

        for row in DEGREE {
            debug!("degree glyph {=str}", glyph::render_row(row).as_str());
        }

        loop {
            Timer::after_secs(STATUS_LOG_INTERVAL).await;

            for relay in relays.iter_mut() {
                RelayState::Off.apply(relay).unwrap_or_else(|e| match e {});
            }
            info!("{} relays held {}", RELAY_PINS.len(), RelayState::Off);
        }
    }
}

// The firmware only links for the RP2040, host builds get an empty binary.
#[cfg(not(target_os = "none"))]
fn main() {}
