//! Microcode word layouts for each instruction family, written as tables of
//! named bit-field rows over the raw 32-bit words. The parser never touches
//! these; only the encode phase reads them.

pub mod bits;

pub mod alu;
pub mod cf;
pub mod tex;
pub mod vtx;
