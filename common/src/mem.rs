
use bytemuck::{try_cast_slice, PodCastError};

// Views a ROM image of two-byte words as pairs. Fails on an odd length.
pub fn as_word_pairs(input: &[u8]) -> Result<&[[u8; 2]], PodCastError> {
    try_cast_slice(input)
}

pub fn be_word(pair: [u8; 2]) -> u16 {
    u16::from_be_bytes(pair)
}
