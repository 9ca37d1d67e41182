#![cfg(test)]

mod helpers;

mod disassembly;
mod extractors;
mod formatting;
mod tms0980;
mod tms1000;
mod tms1100;
mod totality;
