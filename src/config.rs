// compile time tunables

/// mark width bands in 64us ticks: 16 ticks ~1ms, 40 ticks ~2.56ms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// longer marks are start pulses
    pub start: u8,
    /// longer marks (below start) are ones
    pub one: u8,
}

impl Thresholds {
    // vizio remote: 0.6ms zero, 1.68ms one, 2.56ms+ start
    pub const VIZIO: Thresholds = Thresholds::new(40, 16);

    pub const fn new(start: u8, one: u8) -> Self {
        Self { start, one }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::VIZIO
    }
}

/// blocking button debounce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    /// released samples in a row to accept a press
    pub confirmations: u8,
    /// wait between samples
    pub interval_ms: u32,
}

impl DebounceConfig {
    pub const DEFAULT: DebounceConfig = DebounceConfig {
        confirmations: 5,
        interval_ms: 1,
    };
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// servo compare values for tc1 in inverting 10-bit fast pwm, 16us per count
pub const SERVO_MIDDLE: u16 = 0x400 - 105; // 1.68ms pulse
pub const SERVO_LEFT: u16 = SERVO_MIDDLE + 35; // 1.12ms pulse
pub const SERVO_RIGHT: u16 = SERVO_MIDDLE - 35; // 2.24ms pulse

// serial log
pub const LOG_BAUD: u32 = 57_600;
