//! Firmware for a MIDI footswitch built on the [Nucleo-F767ZI development
//! board](https://www.st.com/en/evaluation-tools/nucleo-f767zi.html), which is powered by an F7-series
//! STM32 microcontroller.
//!
//! Each footswitch sends a MIDI Control Change over a classic 5-pin DIN MIDI output (31250 baud serial) when it
//! turns on or off, and lights its LED while on. Momentary switches toggle on each press; latching switches follow
//! their position. At power-on the device sends the state of every footswitch so that whatever is listening
//! starts out in agreement with the LEDs.
//!
//! The firmware is deliberately single-threaded and blocking: there is no executor, no interrupt-driven I/O and
//! no shared state. See [`midi_footswitch_lib::pedalboard::Pedalboard`] for the poll loop itself.
//!
//! For details about the hardware or how to use the device, see the `README`.

#![no_std]
#![no_main]

mod configuration;

use embassy_stm32::{
    Config,
    gpio::{Input, Level, Output, Pull, Speed},
    usart::{self, UartTx},
};
use embassy_time::Delay;
use midi_footswitch_lib::{
    configuration::ActiveLevel,
    footswitch::Footswitch,
    midi::CcEmitter,
    pedalboard::{Pedalboard, SyncButton},
};

#[cfg(feature = "defmt-rtt")]
use defmt_rtt as _;
#[cfg(not(feature = "panic-probe"))]
use panic_halt as _;
#[cfg(feature = "panic-probe")]
use panic_probe as _;

#[cortex_m_rt::entry]
fn main() -> ! {
    #[cfg(feature = "defmt")]
    defmt::info!("Initializing MIDI footswitch");

    // the reset clock (16 MHz HSI) is plenty for polling a few switches and a 31250 baud UART
    let p = embassy_stm32::init(Config::default());

    // MIDI out: USART2 TX is on PD5, pin 6 of CN9 (Zio connector); nothing is ever received, so RX is left unused
    let mut uart_config = usart::Config::default();
    uart_config.baudrate = configuration::MIDI_BAUD_RATE;
    let midi_out = UartTx::new_blocking(p.USART2, p.PD5, uart_config)
        .expect("MIDI UART configuration should be valid");

    // switch inputs are the Zio connector's A1-A4; the first three LEDs are the ones on the board (green, blue,
    // red), the fourth is external on D12
    let [fs1, fs2, fs3, fs4] = configuration::FOOTSWITCHES;
    let footswitches = [
        Footswitch::new(
            fs1,
            Input::new(p.PC0, Pull::Up),
            Some(Output::new(p.PB0, Level::Low, Speed::Low)),
        ),
        Footswitch::new(
            fs2,
            Input::new(p.PC3, Pull::Up),
            Some(Output::new(p.PB7, Level::Low, Speed::Low)),
        ),
        Footswitch::new(
            fs3,
            Input::new(p.PF3, Pull::Up),
            Some(Output::new(p.PB14, Level::Low, Speed::Low)),
        ),
        Footswitch::new(
            fs4,
            Input::new(p.PF5, Pull::Up),
            Some(Output::new(p.PA6, Level::Low, Speed::Low)),
        ),
    ];

    let pedalboard = Pedalboard::new(
        footswitches,
        CcEmitter::new(midi_out),
        Delay,
        configuration::DEVICE,
    );

    // the blue user button (B1) pulls PC13 high when pressed and has its own pull-down on the board
    let pedalboard = if configuration::SYNC_BUTTON_ENABLED {
        pedalboard.with_sync_button(SyncButton::new(
            Input::new(p.PC13, Pull::None),
            ActiveLevel::High,
        ))
    } else {
        pedalboard
    };

    #[cfg(feature = "defmt")]
    defmt::info!("Hardware initialized, handing over to the poll loop");

    pedalboard.run()
}
