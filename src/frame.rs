use infrared::protocol::nec::NecCommand;
use ufmt::{uDisplay, uWrite, uwrite, Formatter};

// vizio remote buttons, as accumulated lsb first
pub const GREEN_BUTTON: u32 = 0xAA55_FB04;
pub const RED_BUTTON: u32 = 0xAD52_FB04;

pub const FRAME_BITS: u8 = 32;

/// nec reading of a word: address and command bytes, each followed by its
/// complement. `None` when a complement does not match.
pub fn nec(word: u32) -> Option<NecCommand> {
    let [addr, addr_inv, cmd, cmd_inv] = word.to_le_bytes();
    if addr != !addr_inv || cmd != !cmd_inv {
        return None;
    }
    Some(NecCommand {
        addr,
        cmd,
        repeat: false,
    })
}

/// accumulator snapshot taken when a frame times out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    word: u32,
    bits: u8,
    stale: bool,
}

impl Frame {
    pub const fn new(word: u32, bits: u8, stale: bool) -> Self {
        Self { word, bits, stale }
    }

    /// bit 0 is the first data bit after the start pulse
    pub const fn word(&self) -> u32 {
        self.word
    }

    /// data pulses since the start pulse, 255 means 255 or more
    pub const fn bits(&self) -> u8 {
        self.bits
    }

    /// no pulse measured since the previous frame, the word is a leftover
    pub const fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn nec(&self) -> Option<NecCommand> {
        nec(self.word)
    }
}

impl uDisplay for Frame {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uwrite!(f, "{:#x} ({} bits)", self.word, self.bits)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Green,
    Red,
    Unrecognized,
}

impl Command {
    /// exact match against the two known codes
    pub const fn from_word(word: u32) -> Self {
        match word {
            GREEN_BUTTON => Command::Green,
            RED_BUTTON => Command::Red,
            _ => Command::Unrecognized,
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Command::Unrecognized)
    }
}

impl uDisplay for Command {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(match self {
            Command::Green => "green",
            Command::Red => "red",
            Command::Unrecognized => "unrecognized",
        })
    }
}
