use super::ActiveLevel;
use wmidi::{Channel, ControlFunction, U7};

/// Determines how the physical position of a switch relates to the logical state of the footswitch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchKind {
    /// A push-and-release button which is only active while held. Each press toggles the footswitch between
    /// on and off; releases don't change anything (unless configured to, see [`ReleaseAction`]).
    Momentary,
    /// An on/off switch which stays where it is put. The footswitch is on whenever the switch is.
    Latching,
}

/// Determines what a confirmed release of a momentary switch does.
///
/// Latching switches have no notion of a release, so they ignore this setting.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReleaseAction {
    /// The release is tracked so the next press can be detected, but produces no output.
    #[default]
    Ignore,
    /// The release sends the current state again (LED and MIDI) without changing it. Handy when the receiving
    /// device tends to drop or override values.
    Resync,
}

/// Preset pairs of Control Change values for a footswitch's on and off states.
///
/// Many effects expose bypass as a controller, in which case "effect on" means "bypass off." The naming here
/// follows what the footswitch sends when it is on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BypassPolarity {
    /// On sends 0, off sends 127.
    SendsZero,
    /// On sends 127, off sends 0.
    SendsMax,
}

impl BypassPolarity {
    /// Returns the `(on, off)` values for this polarity.
    pub const fn values(self) -> (U7, U7) {
        let zero = U7::from_u8_lossy(0);
        let max = U7::from_u8_lossy(127);
        match self {
            Self::SendsZero => (zero, max),
            Self::SendsMax => (max, zero),
        }
    }
}

/// Static description of a single footswitch.
///
/// Pins are not part of the configuration: each [`Footswitch`][crate::footswitch::Footswitch] owns its input
/// and (optional) LED outright, so the configuration only carries behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootswitchConfig {
    /// Whether the switch hardware is momentary or latching.
    pub kind: SwitchKind,
    /// Which electrical level of the input means the switch is on.
    pub active_level: ActiveLevel,
    /// The MIDI channel on which Control Changes are sent.
    pub channel: Channel,
    /// The controller number sent with every message.
    pub controller: ControlFunction,
    /// The value sent when the footswitch turns on.
    pub on_value: U7,
    /// The value sent when the footswitch turns off.
    pub off_value: U7,
    /// What a confirmed release does; only meaningful for momentary switches.
    pub release_action: ReleaseAction,
}

impl FootswitchConfig {
    /// Constructs a [`FootswitchConfig`] for a momentary switch.
    pub const fn momentary(channel: Channel, controller: u8, polarity: BypassPolarity) -> Self {
        Self::new(SwitchKind::Momentary, channel, controller, polarity)
    }

    /// Constructs a [`FootswitchConfig`] for a latching switch.
    pub const fn latching(channel: Channel, controller: u8, polarity: BypassPolarity) -> Self {
        Self::new(SwitchKind::Latching, channel, controller, polarity)
    }

    /// Constructs a [`FootswitchConfig`] with an active-high input and releases ignored.
    ///
    /// The controller number is masked to seven bits.
    pub const fn new(
        kind: SwitchKind,
        channel: Channel,
        controller: u8,
        polarity: BypassPolarity,
    ) -> Self {
        let (on_value, off_value) = polarity.values();
        Self {
            kind,
            active_level: ActiveLevel::High,
            channel,
            controller: ControlFunction(U7::from_u8_lossy(controller)),
            on_value,
            off_value,
            release_action: ReleaseAction::Ignore,
        }
    }

    /// Replaces the on and off values with arbitrary ones.
    pub const fn with_values(mut self, on_value: U7, off_value: U7) -> Self {
        self.on_value = on_value;
        self.off_value = off_value;
        self
    }

    /// Replaces the active level of the input.
    pub const fn with_active_level(mut self, active_level: ActiveLevel) -> Self {
        self.active_level = active_level;
        self
    }

    /// Replaces the release action.
    pub const fn with_release_action(mut self, release_action: ReleaseAction) -> Self {
        self.release_action = release_action;
        self
    }

    /// Returns `true` for momentary switches.
    pub fn is_momentary(&self) -> bool {
        self.kind == SwitchKind::Momentary
    }

    /// Returns the Control Change value matching a logical state.
    pub fn value(&self, is_on: bool) -> U7 {
        if is_on { self.on_value } else { self.off_value }
    }
}
