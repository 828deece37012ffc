//! Provides [`FootswitchState`], the part of a footswitch that changes while the device runs.

use crate::configuration::{FootswitchConfig, ReleaseAction, SwitchKind};

/// The runtime state of a single footswitch.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FootswitchState {
    /// The logical state of the footswitch, i.e., the state last shown on its LED and sent over MIDI.
    pub is_on: bool,
    /// The last confirmed reading of a momentary switch, kept so presses can be told apart from releases.
    /// Latching switches don't use it.
    pub last_raw_reading: bool,
}

impl FootswitchState {
    /// Returns the value a fresh reading is compared against to detect a change.
    ///
    /// For a momentary switch that's the previous reading; for a latching switch, the reading *is* the state.
    pub fn reference(&self, kind: SwitchKind) -> bool {
        match kind {
            SwitchKind::Momentary => self.last_raw_reading,
            SwitchKind::Latching => self.is_on,
        }
    }

    /// Applies a confirmed reading. Returns `true` if the outputs must be synchronized as a result.
    pub fn apply(&mut self, config: &FootswitchConfig, reading: bool) -> bool {
        match config.kind {
            SwitchKind::Momentary => {
                self.last_raw_reading = reading;
                if reading {
                    self.is_on = !self.is_on;
                    true
                } else {
                    config.release_action == ReleaseAction::Resync
                }
            }
            SwitchKind::Latching => {
                let changed = self.is_on != reading;
                self.is_on = reading;
                changed
            }
        }
    }
}
