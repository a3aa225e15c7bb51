use embedded_hal::digital::OutputPin;
use ufmt::{uDisplay, uWrite, uwrite, Formatter};

use crate::actuator::{Actuator, ActuatorState, ServoChannel, Setpoint};
use crate::error::SwitchError;
use crate::frame::{nec, Command, Frame, GREEN_BUTTON, RED_BUTTON};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Boot,
    Remote,
    Manual,
}

impl uDisplay for Origin {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(match self {
            Origin::Boot => "boot",
            Origin::Remote => "remote",
            Origin::Manual => "manual",
        })
    }
}

/// one dispatch, for the serial log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub origin: Origin,
    pub word: u32,
    pub command: Command,
    /// state written to the actuator, `None` when nothing changed
    pub applied: Option<ActuatorState>,
}

impl uDisplay for Event {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uwrite!(f, "{} {:#x} -> {}", self.origin, self.word, self.command)?;
        if !self.command.is_known() {
            if let Some(nec) = nec(self.word) {
                uwrite!(f, " (nec addr {} cmd {})", nec.addr, nec.cmd)?;
            }
        }
        if let Some(state) = &self.applied {
            uwrite!(f, " ({})", state)?;
        }
        Ok(())
    }
}

/// actuator state a command asks for
pub const fn target(command: Command) -> Option<ActuatorState> {
    match command {
        Command::Green => Some(ActuatorState {
            indicator: true,
            position: Setpoint::Left,
        }),
        Command::Red => Some(ActuatorState {
            indicator: false,
            position: Setpoint::Right,
        }),
        Command::Unrecognized => None,
    }
}

pub struct Dispatcher<L, S> {
    actuator: Actuator<L, S>,
    // last dispatched word, the manual override toggles away from it
    last: u32,
}

impl<L, S> Dispatcher<L, S>
where
    L: OutputPin,
    S: ServoChannel,
{
    pub fn new(actuator: Actuator<L, S>) -> Self {
        Self { actuator, last: 0 }
    }

    pub fn actuator(&self) -> &Actuator<L, S> {
        &self.actuator
    }

    /// power up as if the green button had been received
    pub fn boot(&mut self) -> Result<Event, SwitchError<L::Error>> {
        self.dispatch(GREEN_BUTTON, Origin::Boot)
    }

    /// unrecognized words change nothing but still become the toggle reference
    pub fn dispatch(&mut self, word: u32, origin: Origin) -> Result<Event, SwitchError<L::Error>> {
        let command = Command::from_word(word);
        let applied = target(command);
        if let Some(state) = applied {
            self.actuator.apply(state)?;
        }
        self.last = word;
        Ok(Event {
            origin,
            word,
            command,
            applied,
        })
    }

    /// stale frames are dropped without touching anything
    pub fn dispatch_frame(&mut self, frame: Frame) -> Result<Option<Event>, SwitchError<L::Error>> {
        if frame.is_stale() {
            return Ok(None);
        }
        self.dispatch(frame.word(), Origin::Remote).map(Some)
    }

    /// flip between the two known commands, bypassing the decoder
    pub fn manual_override(&mut self) -> Result<Event, SwitchError<L::Error>> {
        // anything but green selects green, even after an unrecognized word
        // (a repeat code, say) left green applied; that press changes nothing
        let word = if self.last == GREEN_BUTTON {
            RED_BUTTON
        } else {
            GREEN_BUTTON
        };
        self.dispatch(word, Origin::Manual)
    }
}
