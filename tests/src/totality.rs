use common::{Chip, ControlFlow, InstructionKind, decode};

#[test]
fn every_opcode_decodes() {
    for chip in Chip::ALL {
        let len = chip.ins_len();
        for raw in 0..chip.num_opcodes() as u16 {
            let ins = decode(raw, chip);
            assert_eq!(ins.len, len, "{chip} {raw:#x}");
            assert_eq!(ins.operand.is_some(), ins.mode().has_operand(), "{chip} {raw:#x}");
            assert!(!ins.mnemonic().is_empty(), "{chip} {raw:#x}");
        }
    }
}

#[test]
fn length_by_chip() {
    for raw in 0..0x200 {
        assert_eq!(decode(raw, Chip::Tms0980).len, 2);
        assert_eq!(decode(raw, Chip::Tms1000).len, 1);
        assert_eq!(decode(raw, Chip::Tms1100).len, 1);
    }
}

#[test]
fn only_call_and_retn_have_hints() {
    for chip in Chip::ALL {
        for raw in 0..chip.num_opcodes() as u16 {
            let ins = decode(raw, chip);
            let expected = match ins.kind {
                InstructionKind::Call => ControlFlow::Call,
                InstructionKind::Retn => ControlFlow::Return,
                _ => ControlFlow::Sequential,
            };
            assert_eq!(ins.flow, expected, "{chip} {raw:#x}");
            assert_eq!(ins.kind.flow(), expected, "{chip} {raw:#x}");
        }
    }
}

#[test]
fn operands_fit_their_fields() {
    for chip in Chip::ALL {
        for raw in 0..chip.num_opcodes() as u16 {
            let ins = decode(raw, chip);
            let Some(val) = ins.operand else {
                continue;
            };
            let max = match ins.mode() {
                common::AddrMode::BitSelect => 8,
                common::AddrMode::Rev2 => 3,
                common::AddrMode::Rev3 => 7,
                common::AddrMode::Rev4 => 0xf,
                common::AddrMode::PcOffset => chip.branch_mask() << 1,
                common::AddrMode::NoOperand => unreachable!(),
            };
            assert!(val <= max, "{chip} {raw:#x}: {val:#x}");
        }
    }
}
