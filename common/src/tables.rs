
// Opcode -> instruction kind, one dense table per chip. Multi-opcode
// instructions (immediates, branch, call) are expanded so every opcode has
// its own entry; anything unassigned is Illegal.

use crate::asm::InstructionKind;
use crate::asm::InstructionKind::*;


const fn span<const N: usize>(
    mut table: [InstructionKind; N],
    start: usize,
    len: usize,
    kind: InstructionKind,
) -> [InstructionKind; N] {
    let mut i = start;
    while i < start + len {
        table[i] = kind;
        i += 1;
    }
    table
}

const fn row<const N: usize>(
    mut table: [InstructionKind; N],
    start: usize,
    kinds: [InstructionKind; 8],
) -> [InstructionKind; N] {
    let mut i = 0;
    while i < kinds.len() {
        table[start + i] = kinds[i];
        i += 1;
    }
    table
}


pub const TMS1000_TABLE: [InstructionKind; 256] = {
    let t = [Illegal; 256];
    let t = row(t, 0x00, [Comx, A8aac, Ynea, Tam, Tamza, A10aac, A6aac, Dan]);
    let t = row(t, 0x08, [Tka, Knez, Tdo, Clo, Rstr, Setr, Ia, Retn]);
    let t = span(t, 0x10, 16, Ldp);
    let t = row(t, 0x20, [Tamiy, Tma, Tmy, Tya, Tay, Amaac, Mnez, Saman]);
    let t = row(t, 0x28, [Imac, Alem, Dman, Iyc, Dyn, Cpaiz, Xma, Cla]);
    let t = span(t, 0x30, 4, Sbit);
    let t = span(t, 0x34, 4, Rbit);
    let t = span(t, 0x38, 4, Tbit1);
    let t = span(t, 0x3c, 4, Ldx);
    let t = span(t, 0x40, 16, Tcy);
    let t = span(t, 0x50, 16, Ynec);
    let t = span(t, 0x60, 16, Tcmiy);
    let t = span(t, 0x70, 16, Alec);
    let t = span(t, 0x80, 64, Branch);
    span(t, 0xc0, 64, Call)
};


// Same width as the TMS1000 but a reshuffled, partly different set: the
// fixed-constant adds, IA and DAN all fold into AC1AC, and X grows a bit.
pub const TMS1100_TABLE: [InstructionKind; 256] = {
    let t = [Illegal; 256];
    let t = row(t, 0x00, [Mnea, Alem, Ynea, Xma, Dyn, Iyc, Amaac, Dman]);
    let t = row(t, 0x08, [Tka, Comx, Tdo, Comc, Rstr, Setr, Knez, Retn]);
    let t = span(t, 0x10, 16, Ldp);
    let t = row(t, 0x20, [Tay, Tma, Tmy, Tya, Tamdyn, Tamiyc, Tamza, Tam]);
    let t = span(t, 0x28, 8, Ldx3);
    let t = span(t, 0x30, 4, Sbit);
    let t = span(t, 0x34, 4, Rbit);
    let t = row(t, 0x38, [Tbit1, Tbit1, Tbit1, Tbit1, Saman, Cpaiz, Imac, Mnez]);
    let t = span(t, 0x40, 16, Tcy);
    let t = span(t, 0x50, 16, Ynec);
    let t = span(t, 0x60, 16, Tcmiy);
    let t = span(t, 0x70, 15, Ac1ac);
    let t = span(t, 0x7f, 1, Cla);
    let t = span(t, 0x80, 64, Branch);
    span(t, 0xc0, 64, Call)
};


// 9-bit words. The whole upper half is branch and call, 128 opcodes each.
pub const TMS0980_TABLE: [InstructionKind; 512] = {
    let t = [Illegal; 512];
    let t = row(t, 0x000, [Comx, Alem, Ynea, Xma, Dyn, Iyc, Cla, Dman]);
    let t = row(t, 0x008, [Tka, Mnea, Tkm, Illegal, Off, Setr, Knez, Illegal]);
    let t = row(t, 0x010, [Dmea, Dnaa, Ccla, Ndmea, Illegal, Amaac, Illegal, Illegal]);
    let t = row(t, 0x018, [Ctmdyn, Xda, Illegal, Illegal, Illegal, Illegal, Illegal, Illegal]);
    let t = span(t, 0x020, 4, Tbit1);
    let t = row(t, 0x028, [Tay, Tma, Tmy, Tya, Tamdyn, Tamiyc, Tamza, Tam]);
    let t = row(t, 0x030, [Saman, Cpaiz, Imac, Mnez, Illegal, Illegal, Illegal, Illegal]);
    let t = span(t, 0x040, 16, Tcy);
    let t = span(t, 0x050, 16, Ynec);
    let t = span(t, 0x060, 16, Tcmiy);
    let t = span(t, 0x070, 16, Acacc);
    let t = span(t, 0x080, 16, Ldp);
    let t = span(t, 0x090, 16, Acnaa);
    let t = span(t, 0x0a0, 4, Sbit);
    let t = span(t, 0x0a4, 4, Rbit);
    let t = span(t, 0x0a8, 8, Ldx3);
    let t = span(t, 0x0b0, 16, Tamacs);
    let t = span(t, 0x0c0, 16, Alec);
    let t = span(t, 0x0d0, 16, Ymcy);
    let t = row(t, 0x0f8, [Reac, Seac, Sal, Sbl, Comc, Rstr, Tdo, Retn]);
    let t = span(t, 0x100, 128, Branch);
    span(t, 0x180, 128, Call)
};
