//! Simulated hardware for exercising the footswitch logic on the host.
//!
//! Every simulated peripheral shares one clock, which only moves when a [`SimDelay`] is asked to wait or a test
//! advances it explicitly. Switches follow a script of level changes keyed to that clock, and every LED write and
//! transmitted byte lands in one ordered log, so tests can assert on exactly what an observer would have seen.

use core::convert::Infallible;
use embedded_hal::{
    delay::DelayNs,
    digital::{self, ErrorKind, InputPin, OutputPin},
};
use embedded_hal_nb::serial;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    vec::Vec,
};

const NANOS_PER_MILLI: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Level {
    Low,
    High,
}

/// Something an external observer could see.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The LED with the given id was driven on or off.
    Led(usize, bool),
    /// A byte went out over the serial link.
    Byte(u8),
}

#[derive(Clone, Default)]
pub struct Bench {
    clock: Rc<Cell<u64>>,
    log: Rc<RefCell<Vec<Event>>>,
    led_cnt: Rc<Cell<usize>>,
}

impl Bench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_us(&self) -> u64 {
        self.clock.get() / 1_000
    }

    pub fn advance_ms(&self, ms: u64) {
        self.clock.set(self.clock.get() + ms * NANOS_PER_MILLI);
    }

    pub fn switch(&self) -> SimSwitch {
        SimSwitch {
            clock: self.clock.clone(),
            script: Rc::default(),
        }
    }

    /// Returns a new LED; ids are handed out in order starting at zero.
    pub fn led(&self) -> SimLed {
        let id = self.led_cnt.get();
        self.led_cnt.set(id + 1);
        SimLed {
            id,
            log: self.log.clone(),
        }
    }

    pub fn uart(&self) -> SimUart {
        SimUart {
            log: self.log.clone(),
            busy_polls: 0,
            polls_left: 0,
        }
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay {
            clock: self.clock.clone(),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    /// Returns only the bytes sent over the serial link, in order.
    pub fn bytes(&self) -> Vec<u8> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Byte(byte) => Some(*byte),
                Event::Led(..) => None,
            })
            .collect()
    }

    /// Returns only the LED writes, in order.
    pub fn led_writes(&self) -> Vec<(usize, bool)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Led(id, is_on) => Some((*id, *is_on)),
                Event::Byte(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

/// A switch input which follows a script of level changes.
///
/// Clones share the script, so a test can keep a handle to a switch it has handed off.
#[derive(Clone)]
pub struct SimSwitch {
    clock: Rc<Cell<u64>>,
    script: Rc<RefCell<Vec<(u64, Level)>>>,
}

impl SimSwitch {
    /// Schedules a level change. When several changes share a time, the one scheduled last wins.
    pub fn set_at_ms(&self, ms: u64, level: Level) {
        let mut script = self.script.borrow_mut();
        script.push((ms * NANOS_PER_MILLI, level));
        script.sort_by_key(|&(at, _)| at);
    }

    /// Convenience for a press that starts at `from_ms` and is released at `to_ms`.
    pub fn pulse_ms(&self, from_ms: u64, to_ms: u64) {
        self.set_at_ms(from_ms, Level::High);
        self.set_at_ms(to_ms, Level::Low);
    }

    fn level(&self) -> Level {
        let now = self.clock.get();
        self.script
            .borrow()
            .iter()
            .take_while(|&&(at, _)| at <= now)
            .last()
            .map(|&(_, level)| level)
            .unwrap_or(Level::Low)
    }
}

impl digital::ErrorType for SimSwitch {
    type Error = Infallible;
}

impl InputPin for SimSwitch {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level() == Level::High)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level() == Level::Low)
    }
}

/// An input whose every read fails.
pub struct BrokenPin;

impl digital::ErrorType for BrokenPin {
    type Error = ErrorKind;
}

impl InputPin for BrokenPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Err(ErrorKind::Other)
    }
}

pub struct SimLed {
    id: usize,
    log: Rc<RefCell<Vec<Event>>>,
}

impl digital::ErrorType for SimLed {
    type Error = Infallible;
}

impl OutputPin for SimLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Led(self.id, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Led(self.id, true));
        Ok(())
    }
}

/// A transmitter which can pretend to be busy for a number of polls before accepting each byte.
pub struct SimUart {
    log: Rc<RefCell<Vec<Event>>>,
    busy_polls: u32,
    polls_left: u32,
}

impl SimUart {
    pub fn busy_for(mut self, polls: u32) -> Self {
        self.busy_polls = polls;
        self.polls_left = polls;
        self
    }
}

impl serial::ErrorType for SimUart {
    type Error = serial::ErrorKind;
}

impl serial::Write for SimUart {
    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        if self.polls_left > 0 {
            self.polls_left -= 1;
            return Err(nb::Error::WouldBlock);
        }
        self.polls_left = self.busy_polls;
        self.log.borrow_mut().push(Event::Byte(word));
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        Ok(())
    }
}

pub struct SimDelay {
    clock: Rc<Cell<u64>>,
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.set(self.clock.get() + u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.clock.set(self.clock.get() + u64::from(us) * 1_000);
    }
}
