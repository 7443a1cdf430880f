#![cfg_attr(not(test), no_std)]

pub mod glyph;
pub mod relay;
pub mod tank;
pub mod validate;

// ***** Temperature program inputs *****
pub const RAMP1_START_TEMP: f32 = 30.5; // Tank 1 setpoint at boot (deg C)
pub const RAMP2_START_TEMP: f32 = 30.75; // Tank 2 setpoint at boot (deg C)
pub const RAMP3_START_TEMP: f32 = 30.5; // Tank 3 setpoint at boot (deg C)
pub const RAMP4_START_TEMP: f32 = 30.75; // Tank 4 setpoint at boot (deg C)

pub const CHILLER_OFFSET: f32 = 0.20; // Margin either side of the setpoint before the chiller switches

// Subtracted from the raw sensor readout, so a sensor that reads low needs a negative value
pub const TANK1_TEMP_CORRECTION: f32 = 0.0;
pub const TANK2_TEMP_CORRECTION: f32 = 0.0;
pub const TANK3_TEMP_CORRECTION: f32 = 0.0;
pub const TANK4_TEMP_CORRECTION: f32 = 0.0;

// ***** PID tuning *****
pub const KP: f32 = 2000.0; // Proportional term - chillers lag, so the loop is kept mostly proportional
pub const KI: f32 = 10.0; // Integral term
pub const KD: f32 = 1000.0; // Derivative term

pub const TEMP_SENSORS: usize = 14; // Sensors on the bus, bounds the readings array
pub const T1_INDEX: usize = 0;
pub const T2_INDEX: usize = 1;
pub const T3_INDEX: usize = 2;
pub const T4_INDEX: usize = 3;

pub const STATUS_LOG_INTERVAL: u64 = 60; // Relay status log interval (seconds)

/// Gains handed to the external control loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct PidGains {
    pub kp: f32,
    pub ki: f32,
    pub kd: f32,
}

pub const PID_GAINS: PidGains = PidGains {
    kp: KP,
    ki: KI,
    kd: KD,
};
