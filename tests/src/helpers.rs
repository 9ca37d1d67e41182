use common::{Chip, InstructionKind, decode};

pub fn text(raw: u16, chip: Chip) -> String {
    decode(raw, chip).to_string()
}

pub fn kind(raw: u16, chip: Chip) -> InstructionKind {
    decode(raw, chip).kind
}

pub fn operand(raw: u16, chip: Chip) -> Option<u16> {
    decode(raw, chip).operand
}
