// leonardo (atmega32u4) implementations of the decoder and actuator seams

mod capture;
mod clock;
mod servo;

pub use capture::Capture;
pub use clock::Clock;
pub use servo::Servo;
