//! This crate contains architecture-agnostic logic for a MIDI footswitch: a small bank of momentary or latching
//! switches, each of which sends a [MIDI](https://midi.org/midi-1-0) Control Change when it turns on or off and
//! optionally shows its state on an LED.
//!
//! Hardware is reached exclusively through the [`embedded-hal`](https://docs.rs/embedded-hal) traits (and
//! [`embedded-hal-nb`](https://docs.rs/embedded-hal-nb) for the serial transmitter), so the logic runs unchanged
//! on the target and against simulated hardware in tests.

#![deny(missing_docs)]
#![cfg_attr(not(test), no_std)]

pub mod configuration;

pub mod debounce;

/// Footswitches and the state machine which turns switch readings into on/off states.
pub mod footswitch;

pub mod midi;

pub mod pedalboard;

pub mod sync;

#[cfg(test)]
mod sim;
