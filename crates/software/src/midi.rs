//! Serializes footswitch states into MIDI Control Change messages and writes them to a serial transmitter.

use crate::configuration::FootswitchConfig;
use embedded_hal_nb::serial;
use wmidi::{Channel, ControlFunction, MidiMessage, U7};

/// The number of bytes in a Control Change message: status, controller, value. Running status is never used.
pub const CC_MESSAGE_LEN: usize = 3;

/// Converts a channel number as musicians count them (1-16) into a [`Channel`].
///
/// Only the low four bits of `number - 1` are considered, so out-of-range numbers wrap around rather than fail:
/// 0 becomes channel 16 and 17 becomes channel 1.
pub const fn channel_from_number(number: u8) -> Channel {
    match number.wrapping_sub(1) & 0x0F {
        0 => Channel::Ch1,
        1 => Channel::Ch2,
        2 => Channel::Ch3,
        3 => Channel::Ch4,
        4 => Channel::Ch5,
        5 => Channel::Ch6,
        6 => Channel::Ch7,
        7 => Channel::Ch8,
        8 => Channel::Ch9,
        9 => Channel::Ch10,
        10 => Channel::Ch11,
        11 => Channel::Ch12,
        12 => Channel::Ch13,
        13 => Channel::Ch14,
        14 => Channel::Ch15,
        _ => Channel::Ch16,
    }
}

/// A Control Change message on its way out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidiCcMessage {
    channel: Channel,
    controller: ControlFunction,
    value: U7,
}

impl MidiCcMessage {
    /// Constructs a [`MidiCcMessage`].
    pub fn new(channel: Channel, controller: ControlFunction, value: U7) -> Self {
        Self {
            channel,
            controller,
            value,
        }
    }

    /// Constructs the message announcing a footswitch's logical state.
    pub fn for_state(config: &FootswitchConfig, is_on: bool) -> Self {
        Self::new(config.channel, config.controller, config.value(is_on))
    }

    /// Returns the status byte: `0xB0` combined with the zero-based channel.
    pub fn status_byte(&self) -> u8 {
        0xB0 | self.channel.index()
    }

    /// Getter.
    pub fn controller(&self) -> u8 {
        u8::from(self.controller.0)
    }

    /// Getter.
    pub fn value(&self) -> u8 {
        u8::from(self.value)
    }

    /// Serializes the message into its wire format.
    pub fn to_bytes(&self) -> [u8; CC_MESSAGE_LEN] {
        let mut bytes = [0_u8; CC_MESSAGE_LEN];
        MidiMessage::from(*self)
            .copy_to_slice(&mut bytes)
            .expect("a Control Change should always fit in three bytes");
        bytes
    }
}

impl From<MidiCcMessage> for MidiMessage<'static> {
    fn from(msg: MidiCcMessage) -> Self {
        MidiMessage::ControlChange(msg.channel, msg.controller, msg.value)
    }
}

/// Writes Control Change messages to a serial transmitter, one byte at a time.
///
/// Each byte is written as soon as the transmitter will take it; there is no buffering. A transmitter that is
/// never ready blocks forever, and a transmitter that reports an error has that error ignored. Nothing is
/// listening for errors on a device like this.
pub struct CcEmitter<T> {
    tx: T,
}

impl<T: serial::Write> CcEmitter<T> {
    /// Constructs a [`CcEmitter`].
    pub fn new(tx: T) -> Self {
        Self { tx }
    }

    /// Sends the message announcing a footswitch's logical state.
    pub fn send(&mut self, config: &FootswitchConfig, is_on: bool) {
        let msg = MidiCcMessage::for_state(config, is_on);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Sending Control Change: channel {}, controller {}, value {}",
            config.channel.number(),
            msg.controller(),
            msg.value()
        );

        self.send_message(&msg);
    }

    /// Sends an arbitrary Control Change message.
    pub fn send_message(&mut self, msg: &MidiCcMessage) {
        for byte in msg.to_bytes() {
            self.send_byte(byte);
        }
    }

    fn send_byte(&mut self, byte: u8) {
        nb::block!(self.tx.write(byte)).ok();
    }
}
