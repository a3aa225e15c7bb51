use arduino_hal::prelude::*;
use avr_device::interrupt::{self, Mutex};
use core::cell::RefCell;
use ir_antenna_switch::config::LOG_BAUD;
use ir_antenna_switch::{
    Actuator, Controller, DebounceConfig, Edge, Frame, Mailbox, PulseDecoder, SwitchError, Thresholds,
};
use panic_halt as _;
use ufmt::{uDisplay, uWrite};

use crate::board::{Capture, Clock, Servo};

// decoder state, touched only by the int6 and timer0 overflow handlers
static DECODER: Mutex<RefCell<PulseDecoder>> =
    Mutex::new(RefCell::new(PulseDecoder::new(Thresholds::VIZIO)));
// completed frames, published by timer0 overflow and taken by the main loop
static FRAMES: Mutex<Mailbox<Frame>> = Mutex::new(Mailbox::new());

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, LOG_BAUD);

    let led = pins.d13.into_output();
    let mut button = pins.d2.into_pull_up_input();
    let _ir = pins.d7.into_pull_up_input();
    let _oc1c = pins.d11.into_output();
    let mut delay = arduino_hal::Delay::new();

    Clock::new(&dp.TC0).init();
    Capture::new(&dp.EXINT).init();
    let servo = Servo::new(dp.TC1);

    let mut controller = Controller::new(Actuator::new(led, servo), DebounceConfig::DEFAULT);
    log(&mut serial, controller.boot());

    // SAFETY: shared state lives behind interrupt mutexes
    unsafe { avr_device::interrupt::enable() };

    loop {
        let step = controller.poll(&mut button, &mut delay, || {
            interrupt::free(|cs| FRAMES.borrow(cs).take())
        });
        match step {
            Ok(step) => {
                for event in [step.manual, step.remote].into_iter().flatten() {
                    ufmt::uwriteln!(&mut serial, "{}\r", event).unwrap_infallible();
                }
            }
            Err(err) => ufmt::uwriteln!(&mut serial, "{:?}\r", err).unwrap_infallible(),
        }
    }
}

fn log<W, T, E>(serial: &mut W, result: Result<T, SwitchError<E>>)
where
    W: uWrite<Error = core::convert::Infallible>,
    T: uDisplay,
{
    match result {
        Ok(value) => ufmt::uwriteln!(serial, "{}\r", value).unwrap_infallible(),
        Err(err) => ufmt::uwriteln!(serial, "{:?}\r", err).unwrap_infallible(),
    }
}

// line level after the edge tells which edge it was
#[avr_device::interrupt(atmega32u4)]
fn INT6() {
    // SAFETY: the handler only touches tc0, exint and a read of pine
    let dp = unsafe { arduino_hal::Peripherals::steal() };
    let edge = if dp.PORTE.pine().read().bits() & Capture::PIN_MASK != 0 {
        Edge::Rising
    } else {
        Edge::Falling
    };
    interrupt::free(|cs| {
        DECODER.borrow(cs).borrow_mut().on_edge(
            edge,
            &mut Clock::new(&dp.TC0),
            &mut Capture::new(&dp.EXINT),
        );
    });
}

// a whole counter period without a falling edge ends the frame
#[avr_device::interrupt(atmega32u4)]
fn TIMER0_OVF() {
    // SAFETY: the handler only touches tc0 and exint
    let dp = unsafe { arduino_hal::Peripherals::steal() };
    interrupt::free(|cs| {
        let frame = DECODER
            .borrow(cs)
            .borrow_mut()
            .on_timeout(&mut Clock::new(&dp.TC0), &mut Capture::new(&dp.EXINT));
        FRAMES.borrow(cs).publish(frame);
    });
}
