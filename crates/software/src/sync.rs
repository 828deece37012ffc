//! Keeps what a footswitch shows (its LED) and what it says (MIDI) in agreement with its state.

use crate::{footswitch::Footswitch, midi::CcEmitter};
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal_nb::serial;

/// Drives the footswitch's LED to match its logical state, then sends the matching Control Change.
///
/// The two writes always happen together and in this order; nothing else runs between them.
pub fn synchronize<I, O, T>(footswitch: &mut Footswitch<I, O>, emitter: &mut CcEmitter<T>)
where
    I: InputPin,
    O: OutputPin,
    T: serial::Write,
{
    let is_on = footswitch.is_on();
    footswitch.light_led(is_on);
    emitter.send(footswitch.config(), is_on);
}

/// Synchronizes every footswitch in order, regardless of whether anything changed. This amounts to a full dump
/// of the device's state to whatever is listening.
pub fn synchronize_all<I, O, T>(footswitches: &mut [Footswitch<I, O>], emitter: &mut CcEmitter<T>)
where
    I: InputPin,
    O: OutputPin,
    T: serial::Write,
{
    for footswitch in footswitches.iter_mut() {
        synchronize(footswitch, emitter);
    }
}
