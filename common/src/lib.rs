pub mod asm;
pub mod chip;
pub mod constants;
pub mod decoder;
pub mod mem;
pub mod operand;
pub mod tables;

pub use asm::{AddrMode, ControlFlow, DecodedIns, InstructionKind};
pub use chip::{Chip, ChipVariant, Tms0980, Tms1000, Tms1100};
pub use decoder::{decode, decode_bytes};
