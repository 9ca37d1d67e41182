
use std::fmt;

use crate::asm::InstructionKind;
use crate::constants::*;
use crate::mem::be_word;
use crate::tables::{TMS0980_TABLE, TMS1000_TABLE, TMS1100_TABLE};


// Everything that differs between the three chips at decode time.
pub trait ChipVariant {
    const NAME: &'static str;
    const WORD_BITS: u32;
    const WORD_MASK: u16 = ((1u32 << Self::WORD_BITS) - 1) as u16;
    const PAGE_BITS: u32;
    const BRANCH_MASK: u16 = ((1u32 << Self::PAGE_BITS) - 1) as u16;
    const INS_LEN: u8 = Self::WORD_BITS.div_ceil(u8::BITS) as u8; // Bytes
    const ROM_WORDS: usize;
    const TABLE: &'static [InstructionKind];

    fn classify(raw: u16) -> InstructionKind {
        Self::TABLE[(raw & Self::WORD_MASK) as usize]
    }

    // Words wider than a byte are stored big-endian, unused high bits first.
    fn fetch(bytes: &[u8]) -> Option<u16> {
        let word = if Self::INS_LEN == 1 {
            bytes.first().map(|&b| b as u16)
        } else {
            bytes.first_chunk::<2>().map(|pair| be_word(*pair))
        };
        word.map(|w| w & Self::WORD_MASK)
    }
}

pub struct Tms0980;

impl ChipVariant for Tms0980 {
    const NAME: &'static str = "TMS0980";
    const WORD_BITS: u32 = TMS0980_WORD_BITS;
    const PAGE_BITS: u32 = TMS0980_PAGE_BITS;
    const ROM_WORDS: usize = TMS0980_ROM_WORDS;
    const TABLE: &'static [InstructionKind] = &TMS0980_TABLE;
}

pub struct Tms1000;

impl ChipVariant for Tms1000 {
    const NAME: &'static str = "TMS1000";
    const WORD_BITS: u32 = TMS1000_WORD_BITS;
    const PAGE_BITS: u32 = TMS1000_PAGE_BITS;
    const ROM_WORDS: usize = TMS1000_ROM_WORDS;
    const TABLE: &'static [InstructionKind] = &TMS1000_TABLE;
}

pub struct Tms1100;

impl ChipVariant for Tms1100 {
    const NAME: &'static str = "TMS1100";
    const WORD_BITS: u32 = TMS1000_WORD_BITS;
    const PAGE_BITS: u32 = TMS1000_PAGE_BITS;
    const ROM_WORDS: usize = TMS1100_ROM_WORDS;
    const TABLE: &'static [InstructionKind] = &TMS1100_TABLE;
}


////////////////////////////////////////////////////////////////////////////////


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chip {
    Tms0980,
    Tms1000,
    Tms1100,
}

// Runs $body with $v bound to the ChipVariant type matching $chip.
macro_rules! with_variant {
    ($chip:expr, $v:ident => $body:expr) => {
        match $chip {
            Chip::Tms0980 => { type $v = Tms0980; $body }
            Chip::Tms1000 => { type $v = Tms1000; $body }
            Chip::Tms1100 => { type $v = Tms1100; $body }
        }
    };
}

impl Chip {
    pub const ALL: [Chip; 3] = [Chip::Tms0980, Chip::Tms1000, Chip::Tms1100];

    pub fn name(self) -> &'static str {
        with_variant!(self, V => V::NAME)
    }

    pub fn word_bits(self) -> u32 {
        with_variant!(self, V => V::WORD_BITS)
    }

    pub fn word_mask(self) -> u16 {
        with_variant!(self, V => V::WORD_MASK)
    }

    pub fn branch_mask(self) -> u16 {
        with_variant!(self, V => V::BRANCH_MASK)
    }

    pub fn ins_len(self) -> u8 {
        with_variant!(self, V => V::INS_LEN)
    }

    pub fn rom_words(self) -> usize {
        with_variant!(self, V => V::ROM_WORDS)
    }

    pub fn table(self) -> &'static [InstructionKind] {
        with_variant!(self, V => V::TABLE)
    }

    pub fn num_opcodes(self) -> usize {
        1 << self.word_bits()
    }

    pub fn classify(self, raw: u16) -> InstructionKind {
        with_variant!(self, V => V::classify(raw))
    }

    pub fn fetch(self, bytes: &[u8]) -> Option<u16> {
        with_variant!(self, V => V::fetch(bytes))
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
