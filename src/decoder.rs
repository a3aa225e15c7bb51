use crate::config::Thresholds;
use crate::frame::{Frame, FRAME_BITS};

// receiver idles high; every bit is a high mark whose width encodes the value.
// marks are timed rising to falling, and a timer overflow (no falling edge for
// a whole counter period) ends the frame. both entry points run in interrupts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
}

/// counter timing the marks, counts up from zero after restart
pub trait TickTimer {
    fn restart(&mut self);
    fn stop(&mut self);
    fn ticks(&self) -> u8;
}

/// interrupt line on the receiver output
pub trait EdgeCapture {
    /// interrupt on the next `edge` only
    fn arm(&mut self, edge: Edge);
    /// drop an edge latched while nobody was listening
    fn clear_pending(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    WaitingForMark,
    MeasuringMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    Start,
    One,
    Zero,
}

impl Pulse {
    pub const fn classify(width: u8, thresholds: &Thresholds) -> Self {
        if width > thresholds.start {
            Pulse::Start
        } else if width > thresholds.one {
            Pulse::One
        } else {
            Pulse::Zero
        }
    }
}

pub struct PulseDecoder {
    thresholds: Thresholds,
    state: State,
    word: u32,
    index: u8,
    // pulses measured since the last published frame
    fresh: bool,
}

impl PulseDecoder {
    pub const fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            state: State::WaitingForMark,
            word: 0,
            index: 0,
            fresh: false,
        }
    }

    pub const fn state(&self) -> State {
        self.state
    }

    /// working accumulator, bits at and above `index` are still zero
    pub const fn word(&self) -> u32 {
        self.word
    }

    /// next data bit, sticks at 255 on endless pulse trains
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// rising edge (re)starts a mark, falling edge ends and classifies it.
    /// a falling edge with no mark in progress is ignored.
    pub fn on_edge<T, C>(&mut self, edge: Edge, timer: &mut T, capture: &mut C) -> Option<Pulse>
    where
        T: TickTimer,
        C: EdgeCapture,
    {
        match (edge, self.state) {
            (Edge::Rising, _) => {
                timer.restart();
                capture.arm(Edge::Falling);
                self.state = State::MeasuringMark;
                None
            }
            (Edge::Falling, State::MeasuringMark) => {
                let width = timer.ticks();
                timer.stop();
                capture.arm(Edge::Rising);
                self.state = State::WaitingForMark;
                Some(self.record(width))
            }
            (Edge::Falling, State::WaitingForMark) => None,
        }
    }

    /// apply one measured mark width to the accumulator
    pub fn record(&mut self, width: u8) -> Pulse {
        let pulse = Pulse::classify(width, &self.thresholds);
        match pulse {
            Pulse::Start => {
                self.word = 0;
                self.index = 0;
            }
            Pulse::One | Pulse::Zero => {
                // writes past the last bit are dropped; the index saturates so
                // it can never wrap back into the word
                if pulse == Pulse::One && self.index < FRAME_BITS {
                    self.word |= 1 << self.index;
                }
                self.index = self.index.saturating_add(1);
            }
        }
        self.fresh = true;
        pulse
    }

    /// line quiet for a whole counter period: re-arm and hand out the frame
    pub fn on_timeout<T, C>(&mut self, timer: &mut T, capture: &mut C) -> Frame
    where
        T: TickTimer,
        C: EdgeCapture,
    {
        timer.stop();
        // changing the sense bits can latch the flag, so clear it afterwards
        capture.arm(Edge::Rising);
        capture.clear_pending();
        self.state = State::WaitingForMark;

        let frame = Frame::new(self.word, self.index, !self.fresh);
        self.fresh = false;
        frame
    }
}

impl Default for PulseDecoder {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeTimer {
        running: bool,
        ticks: u8,
    }

    impl TickTimer for FakeTimer {
        fn restart(&mut self) {
            self.running = true;
            self.ticks = 0;
        }

        fn stop(&mut self) {
            self.running = false;
        }

        fn ticks(&self) -> u8 {
            self.ticks
        }
    }

    #[derive(Default)]
    struct FakeCapture {
        armed: Option<Edge>,
        // edge that was armed at each clear
        cleared: Vec<Option<Edge>>,
    }

    impl EdgeCapture for FakeCapture {
        fn arm(&mut self, edge: Edge) {
            self.armed = Some(edge);
        }

        fn clear_pending(&mut self) {
            self.cleared.push(self.armed);
        }
    }

    fn mark(dec: &mut PulseDecoder, t: &mut FakeTimer, c: &mut FakeCapture, width: u8) -> Option<Pulse> {
        dec.on_edge(Edge::Rising, t, c);
        t.ticks = width;
        dec.on_edge(Edge::Falling, t, c)
    }

    #[test]
    fn rising_edge_starts_timer_and_arms_falling() {
        let (mut t, mut c) = (FakeTimer::default(), FakeCapture::default());
        let mut dec = PulseDecoder::default();

        assert_eq!(dec.on_edge(Edge::Rising, &mut t, &mut c), None);
        assert_eq!(dec.state(), State::MeasuringMark);
        assert!(t.running);
        assert_eq!(c.armed, Some(Edge::Falling));
    }

    #[test]
    fn falling_edge_stops_timer_and_rearms_rising() {
        let (mut t, mut c) = (FakeTimer::default(), FakeCapture::default());
        let mut dec = PulseDecoder::default();

        assert_eq!(mark(&mut dec, &mut t, &mut c, 5), Some(Pulse::Zero));
        assert_eq!(dec.state(), State::WaitingForMark);
        assert!(!t.running);
        assert_eq!(c.armed, Some(Edge::Rising));
    }

    #[test]
    fn falling_edge_while_waiting_is_ignored() {
        let (mut t, mut c) = (FakeTimer::default(), FakeCapture::default());
        let mut dec = PulseDecoder::default();
        dec.record(30);

        assert_eq!(dec.on_edge(Edge::Falling, &mut t, &mut c), None);
        assert_eq!((dec.word(), dec.index()), (1, 1));
    }

    #[test]
    fn classification_bands() {
        let t = Thresholds::VIZIO;
        for width in 0..=16 {
            assert_eq!(Pulse::classify(width, &t), Pulse::Zero);
        }
        for width in 17..=40 {
            assert_eq!(Pulse::classify(width, &t), Pulse::One);
        }
        for width in 41..=255 {
            assert_eq!(Pulse::classify(width, &t), Pulse::Start);
        }
    }

    #[test]
    fn zero_advances_index_without_setting_bit() {
        let mut dec = PulseDecoder::default();
        dec.record(45);
        for width in [0, 5, 16] {
            let before = dec.index();
            dec.record(width);
            assert_eq!(dec.index(), before + 1);
            assert_eq!(dec.word() & (1 << before), 0);
        }
    }

    #[test]
    fn one_sets_exactly_the_indexed_bit() {
        let mut dec = PulseDecoder::default();
        dec.record(45);
        dec.record(5);
        dec.record(5);
        let before = dec.word();

        dec.record(40);
        assert_eq!(dec.word(), before | 1 << 2);
        assert_eq!(dec.index(), 3);
    }

    #[test]
    fn start_resets_word_and_index() {
        let mut dec = PulseDecoder::default();
        for _ in 0..7 {
            dec.record(30);
        }
        assert_eq!(dec.record(41), Pulse::Start);
        assert_eq!((dec.word(), dec.index()), (0, 0));
    }

    #[test]
    fn start_pulse_scenario() {
        let (mut t, mut c) = (FakeTimer::default(), FakeCapture::default());
        let mut dec = PulseDecoder::default();
        dec.record(30);

        assert_eq!(mark(&mut dec, &mut t, &mut c, 45), Some(Pulse::Start));
        assert_eq!((dec.word(), dec.index()), (0, 0));
    }

    #[test]
    fn pulses_past_last_bit_do_not_touch_the_word() {
        let mut dec = PulseDecoder::default();
        dec.record(45);
        for _ in 0..32 {
            dec.record(5);
        }
        for _ in 0..8 {
            dec.record(30);
        }
        assert_eq!(dec.word(), 0);
        assert_eq!(dec.index(), 40);

        // long enough for an 8 bit index to wrap, then a one
        for _ in 0..224 {
            dec.record(5);
        }
        dec.record(30);
        assert_eq!(dec.word(), 0);
        assert_eq!(dec.index(), u8::MAX);
    }

    #[test]
    fn start_recovers_from_saturated_index() {
        let mut dec = PulseDecoder::default();
        for _ in 0..300 {
            dec.record(5);
        }
        dec.record(45);
        dec.record(30);
        assert_eq!((dec.word(), dec.index()), (1, 1));
    }

    #[test]
    fn timeout_mid_mark_rearms_and_publishes() {
        let (mut t, mut c) = (FakeTimer::default(), FakeCapture::default());
        let mut dec = PulseDecoder::default();
        mark(&mut dec, &mut t, &mut c, 45);
        mark(&mut dec, &mut t, &mut c, 30);
        dec.on_edge(Edge::Rising, &mut t, &mut c);

        let frame = dec.on_timeout(&mut t, &mut c);
        assert_eq!(frame, Frame::new(1, 1, false));
        assert_eq!(dec.state(), State::WaitingForMark);
        assert!(!t.running);
        assert_eq!(c.armed, Some(Edge::Rising));
    }

    #[test]
    fn timeout_clears_pending_edge_after_rearming() {
        let (mut t, mut c) = (FakeTimer::default(), FakeCapture::default());
        let mut dec = PulseDecoder::default();
        dec.on_edge(Edge::Rising, &mut t, &mut c);
        assert_eq!(c.armed, Some(Edge::Falling));

        dec.on_timeout(&mut t, &mut c);
        assert_eq!(c.cleared, [Some(Edge::Rising)]);
    }

    #[test]
    fn timeout_without_new_pulses_is_stale() {
        let (mut t, mut c) = (FakeTimer::default(), FakeCapture::default());
        let mut dec = PulseDecoder::default();
        mark(&mut dec, &mut t, &mut c, 30);
        assert!(!dec.on_timeout(&mut t, &mut c).is_stale());

        dec.on_edge(Edge::Rising, &mut t, &mut c);
        let again = dec.on_timeout(&mut t, &mut c);
        assert!(again.is_stale());
        assert_eq!(again.word(), 1);
    }
}
