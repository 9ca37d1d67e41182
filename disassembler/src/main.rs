
use disassembler::{Disassembled, DisasmError, disassemble};
use common::Chip;

use std::ops::Range;

use clap::{Parser, ValueEnum};
use log::info;


#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChipArg {
    Tms0980,
    Tms1000,
    Tms1100,
}

impl From<ChipArg> for Chip {
    fn from(arg: ChipArg) -> Chip {
        match arg {
            ChipArg::Tms0980 => Chip::Tms0980,
            ChipArg::Tms1000 => Chip::Tms1000,
            ChipArg::Tms1100 => Chip::Tms1100,
        }
    }
}

/// TMS0980/TMS1000/TMS1100 Disassembler
#[derive(Parser)]
struct Args {
    /// ROM image to disassemble
    bin: String,

    /// Chip the ROM was dumped from.
    #[arg(long, value_enum, default_value_t=ChipArg::Tms1000)]
    chip: ChipArg,

    /// Word address at which to start listing.
    #[arg(long, default_value_t=0)]
    start: usize,

    /// Number of words to list.
    #[arg(long)]
    count: Option<usize>,
}

// Collapses long runs of the same word (erased or padded ROM) to their
// first and last entries.
fn remove_long_runs(disassembly: &mut Vec<Disassembled>) {
    const THRESH: usize = 8;

    let mut ranges = vec![];
    let mut range_start = 0;
    for i in 1..=disassembly.len() {
        if i < disassembly.len() && disassembly[i].raw == disassembly[range_start].raw {
            continue;
        }
        ranges.push(Range{start: range_start, end: i});
        range_start = i;
    }

    for range in ranges.iter().rev() {
        if range.len() > THRESH {
            // Leave the first and last, an ellipses will be added between.
            disassembly.drain(range.start + 1..range.end - 1);
        }
    }
}


fn main() -> Result<(), DisasmError> {
    env_logger::init();

    let args = Args::parse();
    let chip = Chip::from(args.chip);
    let bin = std::fs::read(&args.bin)?;
    info!("{}: {} bytes, {chip}", args.bin, bin.len());

    let mut disassembly = disassemble(&bin, chip)?;

    let end = args.count.map_or(disassembly.len(), |n| args.start.saturating_add(n));
    disassembly.truncate(end);
    disassembly.drain(..args.start.min(disassembly.len()));

    remove_long_runs(&mut disassembly);

    let mut prev: Option<Disassembled> = None;
    for dis in disassembly {
        if let Some(p) = &prev {
            if p.addr + 1 != dis.addr {
                println!("...");
            }
        }
        println!("{}", dis);
        prev = Some(dis);
    }

    Ok(())
}
