
// Operand field extraction. The immediate fields are wired to the ALU
// LSB-first, so what the opcode carries is the bit-reversed value.

use crate::asm::AddrMode;
use crate::chip::Chip;

// B2: the 2-bit field selects one bit of a RAM nibble.
pub const BIT_VALUE: [u16; 4] = [1, 4, 2, 8];

pub const REVERSE2: [u16; 4] = [0, 2, 1, 3];

pub const REVERSE3: [u16; 8] = [0, 4, 2, 6, 1, 5, 3, 7];

pub const REVERSE4: [u16; 16] = [
    0x0, 0x8, 0x4, 0xc, 0x2, 0xa, 0x6, 0xe,
    0x1, 0x9, 0x5, 0xd, 0x3, 0xb, 0x7, 0xf,
];

pub fn bit_value(raw: u16) -> u16 {
    BIT_VALUE[(raw & 0x3) as usize]
}

pub fn reverse2(raw: u16) -> u16 {
    REVERSE2[(raw & 0x3) as usize]
}

pub fn reverse3(raw: u16) -> u16 {
    REVERSE3[(raw & 0x7) as usize]
}

pub fn reverse4(raw: u16) -> u16 {
    REVERSE4[(raw & 0xf) as usize]
}

// The TMS1000 family only has a 6-bit in-page field even though the
// instruction has room for seven.
pub fn pc_offset(raw: u16, chip: Chip) -> u16 {
    (raw & chip.branch_mask()) << 1
}

pub fn extract(mode: AddrMode, raw: u16, chip: Chip) -> Option<u16> {
    Some(match mode {
        AddrMode::NoOperand => return None,
        AddrMode::BitSelect => bit_value(raw),
        AddrMode::Rev2 => reverse2(raw),
        AddrMode::Rev3 => reverse3(raw),
        AddrMode::Rev4 => reverse4(raw),
        AddrMode::PcOffset => pc_offset(raw, chip),
    })
}
