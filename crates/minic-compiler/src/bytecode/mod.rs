//! Instruction set and emitted program types.
//!
//! - [`OpCode`] - the closed stack-machine vocabulary
//! - [`Ir`] and [`Immediate`] - one emitted item
//! - [`Program`] - the assembled sequence and its listing
//! - [`listing`] - decoding a listing back into IR

mod ir;
pub mod listing;
mod opcode;
mod program;

pub use ir::{Immediate, Ir};
pub use opcode::{OpCode, UnknownMnemonic};
pub use program::Program;
