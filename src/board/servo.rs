use arduino_hal::pac::TC1;
use ir_antenna_switch::ServoChannel;

// servo pulse on d11 = pb7 = oc1c
pub struct Servo {
    tc1: TC1,
}

impl Servo {
    // 10 bit fast pwm, inverting output on oc1c
    const TCCR1A: u8 = 0x0F;
    // 16mhz / 256 = 16 microsecond counts, 1024 counts = 16.4ms frame
    const TCCR1B: u8 = 0x0C;

    /// configure tc1 for servo pulses, no interrupts
    pub fn new(tc1: TC1) -> Self {
        tc1.timsk1().reset();
        // SAFETY: documented mode bits for fast pwm 10 bit, clk/256
        tc1.tccr1a().write(|w| unsafe { w.bits(Self::TCCR1A) });
        tc1.tccr1b().write(|w| unsafe { w.bits(Self::TCCR1B) });
        Self { tc1 }
    }
}

impl ServoChannel for Servo {
    fn set_compare(&mut self, compare: u16) {
        // SAFETY: the 10 bit setpoints fit the compare register
        self.tc1.ocr1c().write(|w| unsafe { w.bits(compare) });
    }
}
