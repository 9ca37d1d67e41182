
use std::fmt;

use common::{Chip, DecodedIns, decode, decode_bytes};
use common::mem::{as_word_pairs, be_word};

use log::{debug, trace, warn};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum DisasmError {
    #[error("{chip} images store two bytes per word, got {len} bytes")]
    OddLength { chip: Chip, len: usize },

    #[error("Image holds {words} words, {chip} ROM is only {max}")]
    TooLarge { chip: Chip, words: usize, max: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}


#[derive(Debug)]
pub struct Disassembled {
    pub addr: u16, // Words
    pub raw: u16,
    pub ins: DecodedIns,
}

impl fmt::Display for Disassembled {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = if self.ins.len == 1 { 2 } else { 3 };
        write!(f, "{:03X}: {:0digits$X}  {}", self.addr, self.raw, self.ins)
    }
}


// Splits a ROM image into instruction words without decoding them.
pub fn rom_words(bin: &[u8], chip: Chip) -> Result<Vec<u16>, DisasmError> {
    let words = if chip.ins_len() == 1 {
        bin.iter().map(|&b| b as u16).collect::<Vec<_>>()
    } else {
        let pairs = as_word_pairs(bin)
            .map_err(|_| DisasmError::OddLength{chip, len: bin.len()})?;
        pairs.iter().map(|&pair| be_word(pair) & chip.word_mask()).collect()
    };

    if words.len() > chip.rom_words() {
        return Err(DisasmError::TooLarge{chip, words: words.len(), max: chip.rom_words()});
    }
    Ok(words)
}

pub fn disassemble(bin: &[u8], chip: Chip) -> Result<Vec<Disassembled>, DisasmError> {
    let words = rom_words(bin, chip)?;

    let mut out = Vec::with_capacity(words.len());
    let mut num_illegal = 0;
    for (addr, &raw) in words.iter().enumerate() {
        let ins = decode(raw, chip);
        trace!("{chip} {addr:#05x}: {raw:#05x} => {ins}");
        if ins.is_illegal() {
            warn!("{chip}: illegal opcode {raw:#05x} at {addr:#05x}");
            num_illegal += 1;
        }
        out.push(Disassembled{addr: addr as u16, raw, ins});
    }

    debug!("Disassembled {} {chip} words, {num_illegal} illegal", out.len());
    Ok(out)
}

// Decodes the instruction at the front of bytes, for callers that fetch
// one instruction at a time. None if bytes is too short.
pub fn disassemble_one(bytes: &[u8], chip: Chip) -> Option<DecodedIns> {
    let ins = decode_bytes(bytes, chip)?;
    trace!("{chip}: {ins}");
    Some(ins)
}
