use crate::glyph::{self, Glyph, DEGREE};
use crate::relay::RELAY_PINS;
use crate::tank::{TankConfig, TANKS};
use crate::{PidGains, CHILLER_OFFSET, PID_GAINS, TEMP_SENSORS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum ConfigError {
    DuplicateRelayPin(u8),
    SensorIndexOutOfRange { tank: u8, index: usize },
    DuplicateSensorIndex(usize),
    GlyphRowTooWide { row: usize },
    InvalidRelayLevel(u8),
    NegativeChillerOffset,
    NonFiniteSetting,
}

pub const fn check_relay_pins(pins: &[u8]) -> Result<(), ConfigError> {
    let mut i = 0;
    while i < pins.len() {
        let mut j = i + 1;
        while j < pins.len() {
            if pins[i] == pins[j] {
                return Err(ConfigError::DuplicateRelayPin(pins[i]));
            }
            j += 1;
        }
        i += 1;
    }
    Ok(())
}

pub const fn check_sensor_indices(tanks: &[TankConfig]) -> Result<(), ConfigError> {
    let mut i = 0;
    while i < tanks.len() {
        let index = tanks[i].sensor_index;
        if index >= TEMP_SENSORS {
            return Err(ConfigError::SensorIndexOutOfRange {
                tank: i as u8 + 1,
                index,
            });
        }
        let mut j = i + 1;
        while j < tanks.len() {
            if tanks[j].sensor_index == index {
                return Err(ConfigError::DuplicateSensorIndex(index));
            }
            j += 1;
        }
        i += 1;
    }
    Ok(())
}

pub const fn check_glyph(glyph: &Glyph) -> Result<(), ConfigError> {
    let mut row = 0;
    while row < glyph::GLYPH_ROWS {
        if !glyph::row_fits(glyph[row]) {
            return Err(ConfigError::GlyphRowTooWide { row });
        }
        row += 1;
    }
    Ok(())
}

/// Integer layout checks, cheap enough to run at compile time.
pub const fn check_layout() -> Result<(), ConfigError> {
    if let Err(e) = check_relay_pins(&RELAY_PINS) {
        return Err(e);
    }
    if let Err(e) = check_sensor_indices(&TANKS) {
        return Err(e);
    }
    check_glyph(&DEGREE)
}

const _: () = assert!(check_layout().is_ok(), "settings layout is inconsistent");

fn check_floats(
    tanks: &[TankConfig],
    gains: &PidGains,
    chiller_offset: f32,
) -> Result<(), ConfigError> {
    let finite = tanks
        .iter()
        .all(|t| t.start_temp.is_finite() && t.temp_correction.is_finite())
        && [gains.kp, gains.ki, gains.kd, chiller_offset]
            .iter()
            .all(|v| v.is_finite());
    if !finite {
        return Err(ConfigError::NonFiniteSetting);
    }
    if chiller_offset < 0.0 {
        return Err(ConfigError::NegativeChillerOffset);
    }
    Ok(())
}

/// Full check of the built-in settings, run by the firmware before any relay
/// is touched.
pub fn validate() -> Result<(), ConfigError> {
    check_layout()?;
    check_floats(&TANKS, &PID_GAINS, CHILLER_OFFSET)
}
