//! Provides the means of turning the noisy readings of mechanical switches into transitions that can be trusted.
//!
//! Debouncing is deliberately blunt: a changed reading is confirmed by waiting out a fixed interval and reading
//! again. The wait blocks, so nothing else is serviced in the meantime.

use crate::configuration::ActiveLevel;
use embassy_time::Duration;
use embedded_hal::{delay::DelayNs, digital::InputPin};

/// An input pin read as the logical position of a switch rather than as an electrical level.
pub struct RawSwitch<I> {
    pin: I,
    active_level: ActiveLevel,
}

impl<I: InputPin> RawSwitch<I> {
    /// Constructs a [`RawSwitch`].
    pub fn new(pin: I, active_level: ActiveLevel) -> Self {
        Self { pin, active_level }
    }

    /// Samples the pin, returning `true` if the switch is on.
    ///
    /// A pin that can't be read is indistinguishable from a switch that is off.
    pub fn is_on(&mut self) -> bool {
        self.pin
            .is_high()
            .map(|is_high| self.active_level.is_active(is_high))
            .unwrap_or(false)
    }
}

/// Confirms changes in switch readings by resampling after a fixed interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debouncer {
    interval: Duration,
}

impl Debouncer {
    /// Constructs a [`Debouncer`].
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Compares a sample against `reference` and, if they differ, waits out the interval and samples again.
    ///
    /// Returns the new reading if the second sample still differs from `reference`, otherwise `None`. Only the
    /// two samples matter; whatever the switch does while the delay runs is never observed.
    pub fn confirm<D: DelayNs>(
        &self,
        delay: &mut D,
        reference: bool,
        mut sample: impl FnMut() -> bool,
    ) -> Option<bool> {
        if sample() == reference {
            return None;
        }

        block_for(delay, self.interval);

        let reading = sample();
        if reading == reference {
            #[cfg(feature = "defmt")]
            defmt::trace!("Bounce discarded, reading settled back to {}", reference);
            None
        } else {
            Some(reading)
        }
    }
}

/// Blocks for the given [`Duration`] using a blocking delay provider.
pub(crate) fn block_for<D: DelayNs>(delay: &mut D, duration: Duration) {
    // a delay longer than u32::MAX microseconds (over an hour) is clamped rather than wrapped
    delay.delay_us(u32::try_from(duration.as_micros()).unwrap_or(u32::MAX));
}
