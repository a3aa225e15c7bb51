use embedded_hal::digital::OutputPin;
use ufmt::{uDisplay, uWrite, Formatter};

use crate::config::{SERVO_LEFT, SERVO_RIGHT};
use crate::error::SwitchError;

// servo positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setpoint {
    Left,
    Right,
}

impl Setpoint {
    /// compare value written to the servo timer
    pub const fn compare(self) -> u16 {
        match self {
            Setpoint::Left => SERVO_LEFT,
            Setpoint::Right => SERVO_RIGHT,
        }
    }
}

/// servo pulse output, open loop with no readback
pub trait ServoChannel {
    fn set_compare(&mut self, compare: u16);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorState {
    pub indicator: bool,
    pub position: Setpoint,
}

impl uDisplay for ActuatorState {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(if self.indicator { "led on, " } else { "led off, " })?;
        f.write_str(match self.position {
            Setpoint::Left => "left",
            Setpoint::Right => "right",
        })
    }
}

/// indicator led plus servo, written together
pub struct Actuator<L, S> {
    led: L,
    servo: S,
    state: Option<ActuatorState>,
}

impl<L, S> Actuator<L, S>
where
    L: OutputPin,
    S: ServoChannel,
{
    pub fn new(led: L, servo: S) -> Self {
        Self {
            led,
            servo,
            state: None,
        }
    }

    /// last state written, `None` before the first write
    pub fn state(&self) -> Option<ActuatorState> {
        self.state
    }

    pub fn apply(&mut self, state: ActuatorState) -> Result<(), SwitchError<L::Error>> {
        if state.indicator {
            self.led.set_high().map_err(SwitchError::Indicator)?;
        } else {
            self.led.set_low().map_err(SwitchError::Indicator)?;
        }
        self.servo.set_compare(state.position.compare());
        self.state = Some(state);
        Ok(())
    }
}
