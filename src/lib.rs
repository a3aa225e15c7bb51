// ir remote controlled antenna switch: vizio green/red buttons or a local
// push button swing a servo and light a led. board glue lives in the binary
#![cfg_attr(not(test), no_std)]

pub mod actuator;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod decoder;
pub mod dispatch;
pub mod error;
pub mod frame;
pub mod mailbox;

pub use actuator::{Actuator, ActuatorState, ServoChannel, Setpoint};
pub use config::{DebounceConfig, Thresholds};
pub use controller::{Controller, Step};
pub use debounce::Debouncer;
pub use decoder::{Edge, EdgeCapture, Pulse, PulseDecoder, State, TickTimer};
pub use dispatch::{Dispatcher, Event, Origin};
pub use error::SwitchError;
pub use frame::{Command, Frame, GREEN_BUTTON, RED_BUTTON};
pub use mailbox::Mailbox;
