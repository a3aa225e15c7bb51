use arduino_hal::pac::TC0;
use ir_antenna_switch::TickTimer;

// tick timer for ir mark widths
pub struct Clock<'a> {
    tc0: &'a TC0,
}

// 16mhz atmega32u4 clock / 1024 = 64 microsecond ticks,
// so the 8 bit counter overflows after ~16.4ms of silence
impl<'a> Clock<'a> {
    pub fn new(tc0: &'a TC0) -> Self {
        Self { tc0 }
    }

    /// normal counting mode, stopped, overflow interrupt enabled
    pub fn init(&self) {
        // SAFETY: zero selects normal mode with the compare outputs disconnected
        self.tc0.tccr0a().write(|w| unsafe { w.bits(0) });
        self.tc0.tccr0b().write(|w| w.cs0().no_clock());
        self.tc0.tifr0().write(|w| w.tov0().set_bit());
        self.tc0.timsk0().write(|w| w.toie0().set_bit());
    }
}

impl TickTimer for Clock<'_> {
    fn restart(&mut self) {
        // SAFETY: any counter value is valid
        self.tc0.tcnt0().write(|w| unsafe { w.bits(0) });
        self.tc0.tifr0().write(|w| w.tov0().set_bit());
        self.tc0.tccr0b().write(|w| w.cs0().prescale_1024());
    }

    fn stop(&mut self) {
        self.tc0.tccr0b().write(|w| w.cs0().no_clock());
    }

    fn ticks(&self) -> u8 {
        self.tc0.tcnt0().read().bits()
    }
}
