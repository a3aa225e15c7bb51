use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::actuator::{Actuator, ServoChannel};
use crate::config::DebounceConfig;
use crate::debounce::Debouncer;
use crate::dispatch::{Dispatcher, Event};
use crate::error::SwitchError;
use crate::frame::Frame;

/// what one pass of the main loop did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub manual: Option<Event>,
    pub remote: Option<Event>,
}

/// main loop body: override button first, then the decoder's frame
pub struct Controller<L, S> {
    dispatcher: Dispatcher<L, S>,
    debouncer: Debouncer,
}

impl<L, S> Controller<L, S>
where
    L: OutputPin,
    S: ServoChannel,
{
    pub fn new(actuator: Actuator<L, S>, debounce: DebounceConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(actuator),
            debouncer: Debouncer::new(debounce),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<L, S> {
        &self.dispatcher
    }

    pub fn boot(&mut self) -> Result<Event, SwitchError<L::Error>> {
        self.dispatcher.boot()
    }

    // take_frame runs after the button, so a frame completed during the
    // debounce wait is still handled in this pass
    pub fn poll<B, D, F>(
        &mut self,
        button: &mut B,
        delay: &mut D,
        take_frame: F,
    ) -> Result<Step, SwitchError<L::Error>>
    where
        B: InputPin<Error = L::Error>,
        D: DelayNs,
        F: FnOnce() -> Option<Frame>,
    {
        let mut step = Step::default();
        if self.debouncer.poll(button, delay)? {
            step.manual = Some(self.dispatcher.manual_override()?);
        }
        if let Some(frame) = take_frame() {
            step.remote = self.dispatcher.dispatch_frame(frame)?;
        }
        Ok(step)
    }
}
