use embassy_time::Duration;

/// What the device does between hardware initialization and the first synchronization of its outputs.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootSequence {
    /// Waits briefly for the circuit to come up before anything is read.
    #[default]
    Settle,
    /// Lights each LED in turn, then darkens each in turn, as a visual self-test. The animation is long enough
    /// that no additional settling period is needed.
    LedChase,
}

impl BootSequence {
    /// How long [`BootSequence::Settle`] waits.
    pub const SETTLE_TIME: Duration = Duration::from_millis(50);

    /// How long [`BootSequence::LedChase`] pauses after each LED changes.
    pub const CHASE_STEP: Duration = Duration::from_millis(150);
}

/// Settings which apply to the device as a whole rather than to a single footswitch.
///
/// The number of footswitches is not a setting; it is the length of the array handed to the
/// [`Pedalboard`][crate::pedalboard::Pedalboard].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// How long a changed reading must hold before it is believed.
    pub debounce: Duration,
    /// What to do before the first synchronization.
    pub boot: BootSequence,
}

impl DeviceConfig {
    /// The debounce time used unless configured otherwise.
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(10);

    /// Constructs a [`DeviceConfig`].
    pub const fn new(debounce: Duration, boot: BootSequence) -> Self {
        Self { debounce, boot }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEBOUNCE, BootSequence::default())
    }
}
