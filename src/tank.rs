use crate::relay::{
    RelayRole, T1_CHILL_RELAY, T1_HEATER_RELAY, T2_CHILL_RELAY, T2_HEATER_RELAY, T3_CHILL_RELAY,
    T3_HEATER_RELAY, T4_CHILL_RELAY, T4_HEATER_RELAY,
};
use crate::{
    CHILLER_OFFSET, RAMP1_START_TEMP, RAMP2_START_TEMP, RAMP3_START_TEMP, RAMP4_START_TEMP,
    T1_INDEX, T2_INDEX, T3_INDEX, T4_INDEX, TANK1_TEMP_CORRECTION, TANK2_TEMP_CORRECTION,
    TANK3_TEMP_CORRECTION, TANK4_TEMP_CORRECTION, TEMP_SENSORS,
};

pub const TANK_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Tank {
    T1,
    T2,
    T3,
    T4,
}

impl Tank {
    pub const ALL: [Tank; TANK_COUNT] = [Tank::T1, Tank::T2, Tank::T3, Tank::T4];

    /// Tank number as printed on the rig, starting at 1.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub const fn from_number(number: u8) -> Option<Tank> {
        match number {
            1 => Some(Tank::T1),
            2 => Some(Tank::T2),
            3 => Some(Tank::T3),
            4 => Some(Tank::T4),
            _ => None,
        }
    }

    pub fn config(self) -> &'static TankConfig {
        &TANK_TABLE[self as usize]
    }
}

/// Everything the control loop needs to know about one tank.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct TankConfig {
    /// Setpoint at boot (deg C).
    pub start_temp: f32,
    /// Sensor bias (deg C), subtracted from the raw reading.
    pub temp_correction: f32,
    /// Position of the tank's sensor in the readings array.
    pub sensor_index: usize,
    pub heater_relay: u8,
    pub chill_relay: u8,
}

impl TankConfig {
    pub const fn relay_pin(&self, role: RelayRole) -> u8 {
        match role {
            RelayRole::Heater => self.heater_relay,
            RelayRole::Chiller => self.chill_relay,
        }
    }

    pub fn corrected(&self, raw: f32) -> f32 {
        raw - self.temp_correction
    }

    /// Corrected temperature of this tank from a full sweep of the sensor bus.
    /// `None` when `sensor_index` is past the end of the bus.
    pub fn reading(&self, readings: &[f32; TEMP_SENSORS]) -> Option<f32> {
        readings
            .get(self.sensor_index)
            .map(|raw| self.corrected(*raw))
    }

    /// Chiller band around the boot setpoint.
    pub fn chiller_band(&self) -> HysteresisBand {
        HysteresisBand::around(self.start_temp)
    }
}

/// Window around a setpoint inside which relays hold their state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct HysteresisBand {
    pub low: f32,
    pub high: f32,
}

impl HysteresisBand {
    /// `setpoint` +/- `CHILLER_OFFSET`.
    pub fn around(setpoint: f32) -> Self {
        HysteresisBand {
            low: setpoint - CHILLER_OFFSET,
            high: setpoint + CHILLER_OFFSET,
        }
    }

    pub fn contains(&self, temp: f32) -> bool {
        temp >= self.low && temp <= self.high
    }
}

pub const TANKS: [TankConfig; TANK_COUNT] = [
    TankConfig {
        start_temp: RAMP1_START_TEMP,
        temp_correction: TANK1_TEMP_CORRECTION,
        sensor_index: T1_INDEX,
        heater_relay: T1_HEATER_RELAY,
        chill_relay: T1_CHILL_RELAY,
    },
    TankConfig {
        start_temp: RAMP2_START_TEMP,
        temp_correction: TANK2_TEMP_CORRECTION,
        sensor_index: T2_INDEX,
        heater_relay: T2_HEATER_RELAY,
        chill_relay: T2_CHILL_RELAY,
    },
    TankConfig {
        start_temp: RAMP3_START_TEMP,
        temp_correction: TANK3_TEMP_CORRECTION,
        sensor_index: T3_INDEX,
        heater_relay: T3_HEATER_RELAY,
        chill_relay: T3_CHILL_RELAY,
    },
    TankConfig {
        start_temp: RAMP4_START_TEMP,
        temp_correction: TANK4_TEMP_CORRECTION,
        sensor_index: T4_INDEX,
        heater_relay: T4_HEATER_RELAY,
        chill_relay: T4_CHILL_RELAY,
    },
];

static TANK_TABLE: [TankConfig; TANK_COUNT] = TANKS;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tank_numbers_round_trip() {
        for tank in Tank::ALL {
            assert_eq!(Tank::from_number(tank.number()), Some(tank));
        }
        assert_eq!(Tank::T1.number(), 1);
        assert_eq!(Tank::T4.number(), 4);
        assert_eq!(Tank::from_number(0), None);
        assert_eq!(Tank::from_number(5), None);
    }

    #[test]
    fn table_follows_settings() {
        let t1 = Tank::T1.config();
        assert_eq!(t1.start_temp, 30.5);
        assert_eq!(t1.sensor_index, 0);
        assert_eq!(t1.relay_pin(RelayRole::Heater), 22);
        assert_eq!(t1.relay_pin(RelayRole::Chiller), 23);

        let t4 = Tank::T4.config();
        assert_eq!(t4.start_temp, 30.75);
        assert_eq!(t4.sensor_index, 3);
        assert_eq!(t4.relay_pin(RelayRole::Heater), 28);
        assert_eq!(t4.relay_pin(RelayRole::Chiller), 29);
    }

    #[test]
    fn correction_is_subtracted() {
        let reads_low = TankConfig {
            temp_correction: -0.5,
            ..TANKS[0]
        };
        assert_eq!(reads_low.corrected(29.5), 30.0);
        assert_eq!(TANKS[0].corrected(29.5), 29.5);
    }

    #[test]
    fn reading_picks_the_tank_sensor() {
        let mut readings = [0.0f32; TEMP_SENSORS];
        for (i, r) in readings.iter_mut().enumerate() {
            *r = 20.0 + i as f32;
        }

        for tank in Tank::ALL {
            let config = tank.config();
            assert_eq!(
                config.reading(&readings),
                Some(20.0 + config.sensor_index as f32)
            );
        }
    }

    #[test]
    fn reading_past_the_bus_is_none() {
        let unplugged = TankConfig {
            sensor_index: TEMP_SENSORS,
            ..TANKS[0]
        };
        assert_eq!(unplugged.reading(&[0.0; TEMP_SENSORS]), None);
    }

    #[test]
    fn chiller_band_straddles_setpoint() {
        let band = HysteresisBand::around(30.0);
        assert_eq!(band.low, 30.0 - CHILLER_OFFSET);
        assert_eq!(band.high, 30.0 + CHILLER_OFFSET);
        assert!(band.contains(30.0));
        assert!(band.contains(band.low));
        assert!(band.contains(band.high));
        assert!(!band.contains(30.5));
        assert!(!band.contains(29.5));
    }

    #[test]
    fn chiller_band_follows_start_temp() {
        for tank in Tank::ALL {
            let config = tank.config();
            let band = config.chiller_band();
            assert_eq!(band, HysteresisBand::around(config.start_temp));
            assert!(band.contains(config.start_temp));
        }
        assert_eq!(Tank::T2.config().chiller_band().high, 30.75 + CHILLER_OFFSET);
    }
}
