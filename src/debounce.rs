// active low override button. a press counts once the line reads released
// `confirmations` times in a row, `interval_ms` apart; a pressed sample
// restarts the count. busy-waits, main loop only, nothing else is polled meanwhile

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::DebounceConfig;
use crate::error::SwitchError;

pub struct Debouncer {
    config: DebounceConfig,
}

impl Debouncer {
    pub const fn new(config: DebounceConfig) -> Self {
        Self { config }
    }

    /// true for one confirmed press and release
    pub fn poll<P, D>(&self, button: &mut P, delay: &mut D) -> Result<bool, SwitchError<P::Error>>
    where
        P: InputPin,
        D: DelayNs,
    {
        if !button.is_low().map_err(SwitchError::Button)? {
            return Ok(false);
        }
        self.wait_for_release(button, delay)?;
        Ok(true)
    }

    /// block until released long enough, returns samples taken
    pub fn wait_for_release<P, D>(&self, button: &mut P, delay: &mut D) -> Result<u32, SwitchError<P::Error>>
    where
        P: InputPin,
        D: DelayNs,
    {
        let mut confirmed = 0;
        let mut samples = 0;
        while confirmed < self.config.confirmations {
            delay.delay_ms(self.config.interval_ms);
            samples += 1;
            if button.is_low().map_err(SwitchError::Button)? {
                confirmed = 0;
            } else {
                confirmed += 1;
            }
        }
        Ok(samples)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DebounceConfig::default())
    }
}
