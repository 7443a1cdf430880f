use embedded_hal::digital::OutputPin;

use crate::validate::ConfigError;

// Relay boards are active low: pulling the input to ground energises the coil.
pub const RELAY_ON: u8 = 0;
pub const RELAY_OFF: u8 = 1;

pub const T1_HEATER_RELAY: u8 = 22; // Tank 1 heater
pub const T1_CHILL_RELAY: u8 = 23; // Tank 1 chiller
pub const T2_HEATER_RELAY: u8 = 24; // Tank 2 heater
pub const T2_CHILL_RELAY: u8 = 25; // Tank 2 chiller
pub const T3_HEATER_RELAY: u8 = 26; // Tank 3 heater
pub const T3_CHILL_RELAY: u8 = 27; // Tank 3 chiller
pub const T4_HEATER_RELAY: u8 = 28; // Tank 4 heater
pub const T4_CHILL_RELAY: u8 = 29; // Tank 4 chiller

/// Every relay pin, tank by tank, heater before chiller.
pub const RELAY_PINS: [u8; 8] = [
    T1_HEATER_RELAY,
    T1_CHILL_RELAY,
    T2_HEATER_RELAY,
    T2_CHILL_RELAY,
    T3_HEATER_RELAY,
    T3_CHILL_RELAY,
    T4_HEATER_RELAY,
    T4_CHILL_RELAY,
];

/// Logic level on a relay input. The discriminant is the level itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
#[repr(u8)]
pub enum RelayState {
    On = RELAY_ON,
    Off = RELAY_OFF,
}

impl RelayState {
    pub const ALL: [RelayState; 2] = [RelayState::On, RelayState::Off];

    pub const fn level(self) -> u8 {
        self as u8
    }

    pub const fn is_high(self) -> bool {
        self.level() != 0
    }

    pub const fn from_high(high: bool) -> Self {
        if high {
            RelayState::Off
        } else {
            RelayState::On
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            RelayState::On => RelayState::Off,
            RelayState::Off => RelayState::On,
        }
    }

    /// Drive `pin` to this state. All relay writes go through here so the
    /// polarity is translated in one place.
    pub fn apply<P: OutputPin>(self, pin: &mut P) -> Result<(), P::Error> {
        pin.set_state(self.is_high().into())
    }
}

impl TryFrom<u8> for RelayState {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            RELAY_ON => Ok(RelayState::On),
            RELAY_OFF => Ok(RelayState::Off),
            other => Err(ConfigError::InvalidRelayLevel(other)),
        }
    }
}

impl From<RelayState> for u8 {
    fn from(state: RelayState) -> Self {
        state.level()
    }
}

#[cfg(target_os = "none")]
impl From<RelayState> for embassy_rp::gpio::Level {
    fn from(state: RelayState) -> Self {
        match state {
            RelayState::On => embassy_rp::gpio::Level::Low,
            RelayState::Off => embassy_rp::gpio::Level::High,
        }
    }
}

/// Which actuator a relay switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum RelayRole {
    Heater,
    Chiller,
}
