use arduino_hal::pac::EXINT;
use ir_antenna_switch::{Edge, EdgeCapture};

// ir receiver on d7 = pe6 = int6
pub struct Capture<'a> {
    exint: &'a EXINT,
}

impl<'a> Capture<'a> {
    pub const PIN_MASK: u8 = 1 << 6;

    // isc6 sense control in eicrb bits 5:4
    const SENSE_SHIFT: u8 = 4;
    const SENSE_MASK: u8 = 0b11 << Self::SENSE_SHIFT;
    const SENSE_FALLING: u8 = 0b10;
    const SENSE_RISING: u8 = 0b11;

    pub fn new(exint: &'a EXINT) -> Self {
        Self { exint }
    }

    /// listen for the first rising edge and unmask int6
    pub fn init(&mut self) {
        self.arm(Edge::Rising);
        self.clear_pending();
        // SAFETY: only the int6 mask bit is added
        self.exint
            .eimsk()
            .modify(|r, w| unsafe { w.bits(r.bits() | Self::PIN_MASK) });
    }
}

impl EdgeCapture for Capture<'_> {
    fn arm(&mut self, edge: Edge) {
        let sense = match edge {
            Edge::Rising => Self::SENSE_RISING,
            Edge::Falling => Self::SENSE_FALLING,
        };
        // SAFETY: only the isc6 bits change
        self.exint.eicrb().modify(|r, w| unsafe {
            w.bits((r.bits() & !Self::SENSE_MASK) | (sense << Self::SENSE_SHIFT))
        });
    }

    fn clear_pending(&mut self) {
        // flag bits clear on writing one
        // SAFETY: writing zero to the other flags leaves them untouched
        self.exint.eifr().write(|w| unsafe { w.bits(Self::PIN_MASK) });
    }
}
