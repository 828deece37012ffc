//! Provides [`Pedalboard`], which owns every footswitch along with the outputs they share, boots them and then
//! polls them forever.

use crate::{
    configuration::{ActiveLevel, BootSequence, DeviceConfig},
    debounce::{self, Debouncer, RawSwitch},
    footswitch::Footswitch,
    midi::CcEmitter,
    sync::synchronize_all,
};
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};
use embedded_hal_nb::serial;

/// A dedicated momentary button which, when pressed, resends the state of every footswitch.
///
/// Useful after plugging in a device which missed the dump sent at power-on.
pub struct SyncButton<I> {
    input: RawSwitch<I>,
    last_raw_reading: bool,
}

impl<I: InputPin> SyncButton<I> {
    /// Constructs a [`SyncButton`].
    pub fn new(pin: I, active_level: ActiveLevel) -> Self {
        Self {
            input: RawSwitch::new(pin, active_level),
            last_raw_reading: false,
        }
    }

    /// Returns `true` if a press was confirmed. Releases are tracked but otherwise ignored.
    fn pressed<D: DelayNs>(&mut self, debouncer: &Debouncer, delay: &mut D) -> bool {
        let input = &mut self.input;
        match debouncer.confirm(delay, self.last_raw_reading, || input.is_on()) {
            Some(reading) => {
                self.last_raw_reading = reading;
                reading
            }
            None => false,
        }
    }
}

/// The whole device: `N` footswitches, an optional sync button, the MIDI output and the delay provider used for
/// debouncing.
///
/// Everything that changes while the device runs is owned here and lent out to one component at a time. There
/// is no concurrency: switches are serviced one after another in a fixed order, and a debounce wait on one
/// switch holds up all the switches after it.
pub struct Pedalboard<I, O, T, D, const N: usize> {
    footswitches: [Footswitch<I, O>; N],
    sync_button: Option<SyncButton<I>>,
    emitter: CcEmitter<T>,
    debouncer: Debouncer,
    delay: D,
    boot: BootSequence,
}

impl<I, O, T, D, const N: usize> Pedalboard<I, O, T, D, N>
where
    I: InputPin,
    O: OutputPin,
    T: serial::Write,
    D: DelayNs,
{
    /// Constructs a [`Pedalboard`]. Nothing is read or written until [`boot`][Self::boot].
    pub fn new(
        footswitches: [Footswitch<I, O>; N],
        emitter: CcEmitter<T>,
        delay: D,
        config: DeviceConfig,
    ) -> Self {
        Self {
            footswitches,
            sync_button: None,
            emitter,
            debouncer: Debouncer::new(config.debounce),
            delay,
            boot: config.boot,
        }
    }

    /// Adds a [`SyncButton`].
    pub fn with_sync_button(mut self, sync_button: SyncButton<I>) -> Self {
        self.sync_button = Some(sync_button);
        self
    }

    /// Getter.
    pub fn footswitches(&self) -> &[Footswitch<I, O>; N] {
        &self.footswitches
    }

    /// Brings the device up: runs the boot sequence, adopts the position of latching switches and sends the
    /// state of every footswitch, in order, whether or not anything changed.
    pub fn boot(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("Booting {} footswitches with {}", N, self.boot);

        match self.boot {
            BootSequence::Settle => debounce::block_for(&mut self.delay, BootSequence::SETTLE_TIME),
            BootSequence::LedChase => self.led_chase(),
        }

        for footswitch in self.footswitches.iter_mut() {
            footswitch.read_initial_position();
        }

        self.synchronize_all();
    }

    /// Sends the state of every footswitch, in order.
    pub fn synchronize_all(&mut self) {
        synchronize_all(&mut self.footswitches, &mut self.emitter);
    }

    /// Makes a single pass over the footswitches, in order, followed by the sync button if there is one.
    pub fn poll(&mut self) {
        for footswitch in self.footswitches.iter_mut() {
            footswitch.poll(&self.debouncer, &mut self.delay, &mut self.emitter);
        }

        let resync = self
            .sync_button
            .as_mut()
            .is_some_and(|button| button.pressed(&self.debouncer, &mut self.delay));
        if resync {
            #[cfg(feature = "defmt")]
            defmt::info!("Sync button pressed, resending all states");
            self.synchronize_all();
        }
    }

    /// Boots the device and polls it forever.
    pub fn run(mut self) -> ! {
        self.boot();
        loop {
            self.poll();
        }
    }

    /// Lights each LED in order, then darkens each in order, pausing after every step.
    fn led_chase(&mut self) {
        for is_on in [true, false] {
            for footswitch in self.footswitches.iter_mut().filter(|f| f.has_led()) {
                footswitch.light_led(is_on);
                debounce::block_for(&mut self.delay, BootSequence::CHASE_STEP);
            }
        }
    }
}
