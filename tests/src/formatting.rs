use common::{Chip, InstructionKind, decode, decode_bytes};
use common::asm::format_ins;

#[test]
fn bare_mnemonic() {
    assert_eq!(format_ins(&decode(0x000, Chip::Tms0980)), "comx");
    assert_eq!(format_ins(&decode(0x0f, Chip::Tms1000)), "retn");
    assert_eq!(format_ins(&decode(0x0c, Chip::Tms0980)), "off");
}

#[test]
fn operand_prefixes() {
    let ins = decode(0x0a0, Chip::Tms0980);
    assert_eq!(ins.mnemonic(), "sbit");
    assert_eq!(ins.operand_text().as_deref(), Some("#$1"));

    let ins = decode(0x4a, Chip::Tms1000);
    assert_eq!(ins.mnemonic(), "tcy");
    assert_eq!(ins.operand_text().as_deref(), Some("#$5"));

    let ins = decode(0x105, Chip::Tms0980);
    assert_eq!(ins.mnemonic(), "branch");
    assert_eq!(ins.operand_text().as_deref(), Some("#$0A"));

    assert_eq!(decode(0x00, Chip::Tms1100).operand_text(), None);
}

#[test]
fn bit_select_is_decimal() {
    // Largest B2 value is still one digit, but it's printed as decimal.
    assert_eq!(format_ins(&decode(0x33, Chip::Tms1000)), "sbit     #$8");
}

#[test]
fn kind_display() {
    assert_eq!(InstructionKind::Ldx3.to_string(), "ldx");
    assert_eq!(InstructionKind::Tbit1.to_string(), "tbit1");
    assert_eq!(InstructionKind::Illegal.to_string(), "illegal");
}

#[test]
fn from_bytes() {
    let ins = decode_bytes(&[0x00, 0x80], Chip::Tms0980).unwrap();
    assert_eq!(ins.to_string(), "ldp      #$0");

    let ins = decode_bytes(&[0x81], Chip::Tms1000).unwrap();
    assert_eq!(ins.to_string(), "branch   #$02");
}
