//! Stack-machine operation codes.
//!
//! The mnemonics returned by [`OpCode::name`] are the wire format read by
//! the downstream interpreter and must not change.

use std::fmt;
use std::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use thiserror::Error;

/// Stack-machine operation codes.
///
/// Operators pop their operands from the stack and push the result.
/// Binary operators pop the left operand first, so the compiler pushes
/// the right operand before the left one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum OpCode {
    /// Do nothing.
    Nop = 0,
    /// Push the following immediate.
    Push,

    // =========================================================================
    // Arithmetic
    // =========================================================================
    /// Add.
    Add,
    /// Subtract.
    Sub,
    /// Multiply.
    Mul,
    /// Divide.
    Div,
    /// Remainder.
    Mod,

    // =========================================================================
    // Comparisons (push 1 or 0)
    // =========================================================================
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Less than.
    Lt,
    /// Greater than.
    Gt,
    /// Less than or equal.
    Le,
    /// Greater than or equal.
    Ge,
    /// Boolean negate.
    Not,

    // =========================================================================
    // I/O
    // =========================================================================
    /// Pop and print as an integer.
    PrintI,
    /// Pop and print as a character.
    PrintC,
    /// Read a character and push it.
    ReadC,

    // =========================================================================
    // Stack and storage
    // =========================================================================
    /// Discard the top of stack.
    Pop,
    /// Pop a slot index, push the value stored there.
    Load,
    /// Pop a slot index, pop a value, store it in the slot.
    Save,

    // =========================================================================
    // Control flow
    // =========================================================================
    /// Unconditional jump.
    J,
    /// Jump if top of stack is zero.
    Jz,
    /// Jump if top of stack is less than or equal to zero.
    Jlez,
    /// Jump if top of stack is non-zero.
    Jnz,
    /// Call a function label.
    Call,
    /// Return from the current function.
    Ret,
    /// Discard a call's result.
    PopC,
    /// Stop the machine.
    Halt,
}

impl OpCode {
    /// Every opcode, in encoding order.
    pub const ALL: [OpCode; 28] = [
        OpCode::Nop,
        OpCode::Push,
        OpCode::Add,
        OpCode::Sub,
        OpCode::Mul,
        OpCode::Div,
        OpCode::Mod,
        OpCode::Eq,
        OpCode::Ne,
        OpCode::Lt,
        OpCode::Gt,
        OpCode::Le,
        OpCode::Ge,
        OpCode::Not,
        OpCode::PrintI,
        OpCode::PrintC,
        OpCode::ReadC,
        OpCode::Pop,
        OpCode::Load,
        OpCode::Save,
        OpCode::J,
        OpCode::Jz,
        OpCode::Jlez,
        OpCode::Jnz,
        OpCode::Call,
        OpCode::Ret,
        OpCode::PopC,
        OpCode::Halt,
    ];

    /// Whether the instruction is followed by an immediate operand.
    #[inline]
    pub fn requires_immediate(&self) -> bool {
        matches!(self, OpCode::Push)
    }

    /// Whether the instruction transfers control to a label.
    #[inline]
    pub fn is_jump(&self) -> bool {
        matches!(
            self,
            OpCode::J | OpCode::Jz | OpCode::Jlez | OpCode::Jnz | OpCode::Call
        )
    }

    /// Get the mnemonic of this opcode.
    pub fn name(&self) -> &'static str {
        match self {
            OpCode::Nop => "NOP",
            OpCode::Push => "PUSH",
            OpCode::Add => "ADD",
            OpCode::Sub => "SUB",
            OpCode::Mul => "MUL",
            OpCode::Div => "DIV",
            OpCode::Mod => "MOD",
            OpCode::Eq => "EQ",
            OpCode::Ne => "NE",
            OpCode::Lt => "LT",
            OpCode::Gt => "GT",
            OpCode::Le => "LE",
            OpCode::Ge => "GE",
            OpCode::Not => "NOT",
            OpCode::PrintI => "PRINTI",
            OpCode::PrintC => "PRINTC",
            OpCode::ReadC => "READC",
            OpCode::Pop => "POP",
            OpCode::Load => "LOAD",
            OpCode::Save => "SAVE",
            OpCode::J => "J",
            OpCode::Jz => "JZ",
            OpCode::Jlez => "JLEZ",
            OpCode::Jnz => "JNZ",
            OpCode::Call => "CALL",
            OpCode::Ret => "RET",
            OpCode::PopC => "POPC",
            OpCode::Halt => "HALT",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A mnemonic that names no opcode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mnemonic '{0}'")]
pub struct UnknownMnemonic(pub String);

impl FromStr for OpCode {
    type Err = UnknownMnemonic;

    /// Parse a mnemonic. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpCode::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownMnemonic(s.to_string()))
    }
}
