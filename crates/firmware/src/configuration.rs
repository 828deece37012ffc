//! Build-time configuration of this particular footswitch: what each switch sends and how the device boots.
//!
//! Pin assignments live in `main.rs` next to the rest of the hardware setup; the order of [`FOOTSWITCHES`] is the
//! order in which those pins are handed out, the order of the power-on dump and the order of polling.

use embassy_time::Duration;
use midi_footswitch_lib::{
    configuration::{ActiveLevel, BootSequence, BypassPolarity, DeviceConfig, FootswitchConfig},
    midi::channel_from_number,
};
use wmidi::Channel;

/// Number of footswitches on the device.
pub const FOOTSWITCH_CNT: usize = 4;

/// Every footswitch sends on the same channel.
const CHANNEL: Channel = channel_from_number(1);

/// The effects this footswitch was built for treat these controllers as bypass, so "on" sends 0.
const POLARITY: BypassPolarity = BypassPolarity::SendsZero;

/// The switches are wired to ground and read through the MCU's pull-ups, so a closed switch reads low.
const ACTIVE_LEVEL: ActiveLevel = ActiveLevel::Low;

/// Per-footswitch settings, in pin order.
pub const FOOTSWITCHES: [FootswitchConfig; FOOTSWITCH_CNT] = [
    FootswitchConfig::momentary(CHANNEL, 102, POLARITY).with_active_level(ACTIVE_LEVEL),
    FootswitchConfig::momentary(CHANNEL, 103, POLARITY).with_active_level(ACTIVE_LEVEL),
    FootswitchConfig::momentary(CHANNEL, 104, POLARITY).with_active_level(ACTIVE_LEVEL),
    FootswitchConfig::momentary(CHANNEL, 105, POLARITY).with_active_level(ACTIVE_LEVEL),
];

/// Settings for the device as a whole.
pub const DEVICE: DeviceConfig = DeviceConfig::new(Duration::from_millis(10), BootSequence::LedChase);

/// Whether the Nucleo's user button is used to resend every footswitch's state.
pub const SYNC_BUTTON_ENABLED: bool = true;

/// The MIDI 1.0 serial rate.
pub const MIDI_BAUD_RATE: u32 = 31_250;
