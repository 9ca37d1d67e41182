
use crate::asm::DecodedIns;
use crate::chip::Chip;
use crate::operand::extract;

// Total over the opcode space; unassigned opcodes come back as Illegal.
pub fn decode(raw: u16, chip: Chip) -> DecodedIns {
    let kind = chip.classify(raw);
    DecodedIns{
        kind,
        operand: extract(kind.mode(), raw, chip),
        len: chip.ins_len(),
        flow: kind.flow(),
    }
}

// None if bytes is too short to hold a whole instruction.
pub fn decode_bytes(bytes: &[u8], chip: Chip) -> Option<DecodedIns> {
    chip.fetch(bytes).map(|raw| decode(raw, chip))
}
