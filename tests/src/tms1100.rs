use common::{Chip, ControlFlow, InstructionKind, decode};
use crate::helpers::{kind, text};

const CHIP: Chip = Chip::Tms1100;

#[test]
fn fixed_opcodes() {
    use InstructionKind::*;
    let expected = [
        Mnea, Alem, Ynea, Xma, Dyn, Iyc, Amaac, Dman,
        Tka, Comx, Tdo, Comc, Rstr, Setr, Knez, Retn,
    ];
    for (raw, exp) in expected.into_iter().enumerate() {
        assert_eq!(kind(raw as u16, CHIP), exp, "{raw:#x}");
    }
}

#[test]
fn diverges_from_tms1000() {
    assert_eq!(kind(0x00, Chip::Tms1000), InstructionKind::Comx);
    assert_eq!(kind(0x00, CHIP), InstructionKind::Mnea);

    assert_eq!(kind(0x07, Chip::Tms1000), InstructionKind::Dan);
    assert_eq!(kind(0x7e, CHIP), InstructionKind::Ac1ac);

    assert_eq!(kind(0x2f, Chip::Tms1000), InstructionKind::Cla);
    assert_eq!(kind(0x7f, CHIP), InstructionKind::Cla);
}

#[test]
fn ldx_is_three_bits() {
    for raw in 0x28..=0x2f {
        assert_eq!(kind(raw, CHIP), InstructionKind::Ldx3, "{raw:#x}");
    }
    assert_eq!(text(0x2b, CHIP), "ldx      #$6");
}

#[test]
fn ac1ac() {
    assert_eq!(text(0x70, CHIP), "ac1ac    #$0");
    assert_eq!(text(0x71, CHIP), "ac1ac    #$8");
    assert_eq!(text(0x7e, CHIP), "ac1ac    #$7");
}

#[test]
fn memory_ops() {
    assert_eq!(kind(0x3c, CHIP), InstructionKind::Saman);
    assert_eq!(kind(0x3f, CHIP), InstructionKind::Mnez);
    assert_eq!(text(0x24, CHIP), "tamdyn");
    assert_eq!(text(0x25, CHIP), "tamiyc");
}

#[test]
fn branch_and_call() {
    assert_eq!(decode(0x80, CHIP).flow, ControlFlow::Sequential);
    assert_eq!(decode(0xff, CHIP).flow, ControlFlow::Call);
    assert_eq!(decode(0xff, CHIP).operand, Some(0x7e));
    assert_eq!(decode(0x0f, CHIP).flow, ControlFlow::Return);
}

#[test]
fn ldx_shows_full_x_value() {
    // Decoded as a 2-bit field this would read #$2.
    assert_eq!(text(0x29, CHIP), "ldx      #$4");
    assert_eq!(decode(0x29, CHIP).mode(), common::AddrMode::Rev3);
}
