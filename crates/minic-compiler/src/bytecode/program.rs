//! Assembled programs and their textual listing.
//!
//! A [`Program`] is the prologue call to the entry function, the lowered
//! top-level code, and a final `HALT`. Its listing has one instruction per
//! line; a bare `PUSH` and the literal after it share a line:
//!
//! ```text
//! 	CALL main
//! main:
//! 	PUSH 'y'
//! 	PRINTC
//! 	RET
//! 	HALT
//! ```

use std::fmt;
use std::io;

use super::{Ir, OpCode};

/// A complete, ordered instruction sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    items: Vec<Ir>,
}

impl Program {
    /// Wrap `body` with a call to `entry` and a trailing `HALT`.
    pub fn assemble(entry: &str, body: Vec<Ir>) -> Self {
        let mut items = Vec::with_capacity(body.len() + 2);
        items.push(Ir::Call(entry.to_string()));
        items.extend(body);
        items.push(Ir::Halt);
        Self { items }
    }

    /// Build a program from already-ordered items, without adding anything.
    pub fn from_items(items: Vec<Ir>) -> Self {
        Self { items }
    }

    /// The emitted items.
    pub fn items(&self) -> &[Ir] {
        &self.items
    }

    /// Take the emitted items.
    pub fn into_items(self) -> Vec<Ir> {
        self.items
    }

    /// Number of items, counting literal tokens separately from their `PUSH`.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the program has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines the listing will have.
    pub fn line_count(&self) -> usize {
        self.items.iter().filter(|ir| ir.starts_line()).count()
    }

    /// Write the listing to `out` in a single pass.
    pub fn write_listing<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Render the listing.
    pub fn to_listing(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ir in &self.items {
            if *ir == Ir::Op(OpCode::Push) {
                write!(f, "{} ", ir)?;
            } else {
                writeln!(f, "{}", ir)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::Immediate;

    #[test]
    fn assemble_wraps_body() {
        let program = Program::assemble("main", vec![Ir::label("main"), Ir::Return]);
        assert_eq!(
            program.items(),
            &[
                Ir::Call("main".into()),
                Ir::label("main"),
                Ir::Return,
                Ir::Halt,
            ]
        );
    }

    #[test]
    fn empty_body_is_call_then_halt() {
        let program = Program::assemble("main", Vec::new());
        assert_eq!(program.to_listing(), "\tCALL main\n\tHALT\n");
    }

    #[test]
    fn push_shares_line_with_literal() {
        let program = Program::assemble(
            "main",
            vec![
                Ir::Op(OpCode::Push),
                Ir::Number(Immediate::Char('y')),
                Ir::Op(OpCode::PrintC),
                Ir::Push(3),
                Ir::Load,
            ],
        );
        assert_eq!(
            program.to_listing(),
            "\tCALL main\n\tPUSH 'y'\n\tPRINTC\n\tPUSH 3\n\tLOAD\n\tHALT\n"
        );
        assert_eq!(program.len(), 7);
        assert_eq!(program.line_count(), 6);
    }

    #[test]
    fn write_listing_matches_display() {
        let program = Program::assemble("start", vec![Ir::jump(OpCode::J, "_end_if_0")]);
        let mut out = Vec::new();
        program.write_listing(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), program.to_listing());
    }
}
