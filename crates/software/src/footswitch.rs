use crate::{
    configuration::{FootswitchConfig, SwitchKind},
    debounce::{Debouncer, RawSwitch},
    midi::CcEmitter,
    sync::synchronize,
};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin, PinState},
};
use embedded_hal_nb::serial;

mod state;
pub use state::*;

/// A single footswitch: its configuration, the pins it owns and its runtime state.
///
/// The state changes only in [`poll`][Self::poll] (and, for latching switches, once at startup in
/// [`read_initial_position`][Self::read_initial_position]). Every change made by `poll` is synchronized to the
/// LED and over MIDI before `poll` returns, so the outputs never disagree with the state for longer than it
/// takes to write them.
pub struct Footswitch<I, O> {
    config: FootswitchConfig,
    input: RawSwitch<I>,
    led: Option<O>,
    state: FootswitchState,
}

impl<I: InputPin, O: OutputPin> Footswitch<I, O> {
    /// Constructs a [`Footswitch`], initially off.
    pub fn new(config: FootswitchConfig, input: I, led: Option<O>) -> Self {
        Self {
            config,
            input: RawSwitch::new(input, config.active_level),
            led,
            state: FootswitchState::default(),
        }
    }

    /// Getter.
    pub fn config(&self) -> &FootswitchConfig {
        &self.config
    }

    /// Getter.
    pub fn state(&self) -> FootswitchState {
        self.state
    }

    /// Convenience function returning the logical state.
    pub fn is_on(&self) -> bool {
        self.state.is_on
    }

    /// Returns `true` if an LED is attached to this footswitch.
    pub fn has_led(&self) -> bool {
        self.led.is_some()
    }

    /// Adopts the physical position of a latching switch as its initial state, without producing any output.
    ///
    /// Momentary switches have no meaningful position at power-on and stay off.
    pub fn read_initial_position(&mut self) {
        if self.config.kind == SwitchKind::Latching {
            self.state.is_on = self.input.is_on();
        }
    }

    /// Samples the switch and, if a change is confirmed, updates the state and synchronizes the outputs.
    ///
    /// Blocks for the debounce interval whenever the first sample differs from the last known one.
    pub fn poll<D: DelayNs, T: serial::Write>(
        &mut self,
        debouncer: &Debouncer,
        delay: &mut D,
        emitter: &mut CcEmitter<T>,
    ) {
        let reference = self.state.reference(self.config.kind);
        let input = &mut self.input;
        let Some(reading) = debouncer.confirm(delay, reference, || input.is_on()) else {
            return;
        };

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Confirmed {} switch reading {} for controller {}",
            self.config.kind,
            reading,
            u8::from(self.config.controller.0)
        );

        if self.state.apply(&self.config, reading) {
            synchronize(self, emitter);
        }
    }

    /// Drives the LED, if there is one. Write failures are ignored.
    pub fn light_led(&mut self, is_on: bool) {
        if let Some(led) = self.led.as_mut() {
            led.set_state(PinState::from(is_on)).ok();
        }
    }
}
