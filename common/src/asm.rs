
use std::fmt;

use derive_more::IsVariant;


// How operand bits embedded in the opcode turn into a value. Rev3 is not
// in the original five-mode set, which decoded the 3-bit LDX field as I2
// (TMS1100 0x29 showed #$2); here it shows the real X value, #$4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrMode {
    NoOperand, // B0
    BitSelect, // B2, 2-bit field picks one bit of a nibble
    Rev2,      // I2, 2-bit field, bit reversed
    Rev3,      // I3, 3-bit field, bit reversed
    Rev4,      // I4, 4-bit field, bit reversed
    PcOffset,  // B7, branch/call target within the page
}

impl AddrMode {
    pub fn has_operand(self) -> bool {
        self != AddrMode::NoOperand
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum ControlFlow {
    Sequential,
    Call,
    Return,
}


////////////////////////////////////////////////////////////////////////////////


// One tag per mnemonic across all three chips. Instructions that share a
// mnemonic but not an operand width get their own tag (Ldx, Ldx3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    A6aac,
    A8aac,
    A10aac,
    Ac1ac,
    Acacc,
    Acnaa,
    Alec,
    Alem,
    Amaac,
    Branch,
    Call,
    Ccla,
    Cla,
    Clo,
    Comc,
    Comx,
    Cpaiz,
    Ctmdyn,
    Dan,
    Dman,
    Dmea,
    Dnaa,
    Dyn,
    Ia,
    Imac,
    Iyc,
    Knez,
    Ldp,
    Ldx,
    Ldx3,
    Mnea,
    Mnez,
    Ndmea,
    Off,
    Rbit,
    Reac,
    Retn,
    Rstr,
    Sal,
    Saman,
    Sbit,
    Sbl,
    Seac,
    Setr,
    Tam,
    Tamacs,
    Tamdyn,
    Tamiy,
    Tamiyc,
    Tamza,
    Tay,
    Tbit1,
    Tcmiy,
    Tcy,
    Tdo,
    Tka,
    Tkm,
    Tma,
    Tmy,
    Tya,
    Xda,
    Xma,
    Ymcy,
    Ynea,
    Ynec,
    Illegal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindInfo {
    pub mnemonic: &'static str,
    pub mode: AddrMode,
    pub flow: ControlFlow,
}

impl InstructionKind {
    pub const fn info(self) -> KindInfo {
        use InstructionKind::*;
        use AddrMode::*;
        let (mnemonic, mode) = match self {
            A6aac => ("a6aac", NoOperand),
            A8aac => ("a8aac", NoOperand),
            A10aac => ("a10aac", NoOperand),
            Ac1ac => ("ac1ac", Rev4),
            Acacc => ("acacc", Rev4),
            Acnaa => ("acnaa", Rev4),
            Alec => ("alec", Rev4),
            Alem => ("alem", NoOperand),
            Amaac => ("amaac", NoOperand),
            Branch => ("branch", PcOffset),
            Call => ("call", PcOffset),
            Ccla => ("ccla", NoOperand),
            Cla => ("cla", NoOperand),
            Clo => ("clo", NoOperand),
            Comc => ("comc", NoOperand),
            Comx => ("comx", NoOperand),
            Cpaiz => ("cpaiz", NoOperand),
            Ctmdyn => ("ctmdyn", NoOperand),
            Dan => ("dan", NoOperand),
            Dman => ("dman", NoOperand),
            Dmea => ("dmea", NoOperand),
            Dnaa => ("dnaa", NoOperand),
            Dyn => ("dyn", NoOperand),
            Ia => ("ia", NoOperand),
            Imac => ("imac", NoOperand),
            Iyc => ("iyc", NoOperand),
            Knez => ("knez", NoOperand),
            Ldp => ("ldp", Rev4),
            Ldx => ("ldx", Rev2),
            Ldx3 => ("ldx", Rev3),
            Mnea => ("mnea", NoOperand),
            Mnez => ("mnez", NoOperand),
            Ndmea => ("ndmea", NoOperand),
            Off => ("off", NoOperand),
            Rbit => ("rbit", BitSelect),
            Reac => ("reac", NoOperand),
            Retn => ("retn", NoOperand),
            Rstr => ("rstr", NoOperand),
            Sal => ("sal", NoOperand),
            Saman => ("saman", NoOperand),
            Sbit => ("sbit", BitSelect),
            Sbl => ("sbl", NoOperand),
            Seac => ("seac", NoOperand),
            Setr => ("setr", NoOperand),
            Tam => ("tam", NoOperand),
            Tamacs => ("tamacs", Rev4),
            Tamdyn => ("tamdyn", NoOperand),
            Tamiy => ("tamiy", NoOperand),
            Tamiyc => ("tamiyc", NoOperand),
            Tamza => ("tamza", NoOperand),
            Tay => ("tay", NoOperand),
            Tbit1 => ("tbit1", BitSelect),
            Tcmiy => ("tcmiy", Rev4),
            Tcy => ("tcy", Rev4),
            Tdo => ("tdo", NoOperand),
            Tka => ("tka", NoOperand),
            Tkm => ("tkm", NoOperand),
            Tma => ("tma", NoOperand),
            Tmy => ("tmy", NoOperand),
            Tya => ("tya", NoOperand),
            Xda => ("xda", NoOperand),
            Xma => ("xma", NoOperand),
            Ymcy => ("ymcy", Rev4),
            Ynea => ("ynea", NoOperand),
            Ynec => ("ynec", Rev4),
            Illegal => ("illegal", NoOperand),
        };

        // Only call and return carry debugger step hints. Branch falls
        // under Sequential.
        let flow = match self {
            Call => ControlFlow::Call,
            Retn => ControlFlow::Return,
            _ => ControlFlow::Sequential,
        };

        KindInfo{mnemonic, mode, flow}
    }

    pub fn mnemonic(self) -> &'static str {
        self.info().mnemonic
    }

    pub fn mode(self) -> AddrMode {
        self.info().mode
    }

    pub fn flow(self) -> ControlFlow {
        self.info().flow
    }
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}


////////////////////////////////////////////////////////////////////////////////


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedIns {
    pub kind: InstructionKind,
    pub operand: Option<u16>, // Some iff kind.mode() has an operand
    pub len: u8,              // Bytes
    pub flow: ControlFlow,
}

impl DecodedIns {
    pub const MNEMONIC_WIDTH: usize = 8;

    pub fn mode(&self) -> AddrMode {
        self.kind.mode()
    }

    pub fn mnemonic(&self) -> &'static str {
        self.kind.mnemonic()
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == InstructionKind::Illegal
    }

    pub fn operand_text(&self) -> Option<String> {
        let val = self.operand?;
        Some(match self.mode() {
            AddrMode::BitSelect => format!("#${val}"),
            AddrMode::Rev2 | AddrMode::Rev3 | AddrMode::Rev4 => format!("#${val:01X}"),
            AddrMode::PcOffset => format!("#${val:02X}"),
            AddrMode::NoOperand => return None,
        })
    }
}

impl fmt::Display for DecodedIns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.operand_text() {
            Some(op) => write!(f, "{:<width$} {op}", self.mnemonic(), width = Self::MNEMONIC_WIDTH),
            None => f.write_str(self.mnemonic()),
        }
    }
}

pub fn format_ins(ins: &DecodedIns) -> String {
    ins.to_string()
}
