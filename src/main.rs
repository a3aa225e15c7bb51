#![cfg_attr(target_arch = "avr", no_std, no_main, feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod board;
#[cfg(target_arch = "avr")]
mod firmware;

// the firmware image is only built for avr; host builds get an empty binary
// so the library and its tests compile anywhere
#[cfg(not(target_arch = "avr"))]
fn main() {}
