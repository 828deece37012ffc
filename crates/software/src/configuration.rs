//! This module contains the build-time settings of the footswitch, both per switch and for the device as a whole.
//!
//! Everything here is meant to be assembled in `const` context by the firmware and handed to the
//! [`Pedalboard`][crate::pedalboard::Pedalboard] once at startup. Nothing is reconfigured at runtime.

mod device;
pub use device::*;

mod footswitch;
pub use footswitch::*;

/// Determines which electrical level of an input means "the switch is on."
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// The switch reads as on when its pin is high (e.g., switch to VCC with a pull-down).
    #[default]
    High,
    /// The switch reads as on when its pin is low (e.g., switch to ground with a pull-up).
    Low,
}

impl ActiveLevel {
    /// Translates an electrical level into the logical position of the switch.
    pub fn is_active(&self, is_high: bool) -> bool {
        match self {
            Self::High => is_high,
            Self::Low => !is_high,
        }
    }
}
