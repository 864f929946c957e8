//! Intermediate representation items.
//!
//! An [`Ir`] is one entry of the emitted program. Items are structured
//! records; their text is derived by `Display` when the program is written
//! out (see [`Program`](super::Program)).

use std::fmt;

use super::OpCode;

/// Literal token written after a bare `PUSH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Immediate {
    /// Integer literal, written in decimal.
    Int(i64),
    /// Character literal, written quoted and escaped as `'c'`.
    ///
    /// Escaping follows [`char::escape_default`], so control characters
    /// never break the one-instruction-per-line listing.
    Char(char),
}

impl fmt::Display for Immediate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Immediate::Int(value) => write!(f, "{}", value),
            Immediate::Char(value) => write!(f, "'{}'", value.escape_default()),
        }
    }
}

/// One emitted item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ir {
    /// Operator instruction with no inline operand (`ADD`, `PRINTC`, a bare `PUSH`, ...).
    Op(OpCode),
    /// Literal token completing the preceding bare `PUSH`.
    Number(Immediate),
    /// `PUSH` with an inline immediate, used for storage slots.
    Push(i64),
    /// Label definition.
    Label(String),
    /// Jump to a label.
    Jump {
        /// `J`, `JZ`, `JLEZ` or `JNZ`.
        op: OpCode,
        /// Target label.
        target: String,
    },
    /// Store to a slot.
    Save,
    /// Load from a slot.
    Load,
    /// Return from a function.
    Return,
    /// Stop the machine.
    Halt,
    /// Call a function label.
    Call(String),
}

impl Ir {
    /// A label definition.
    pub fn label(name: impl Into<String>) -> Self {
        Ir::Label(name.into())
    }

    /// A control transfer to `target`.
    ///
    /// `CALL` produces [`Ir::Call`]; the other jump opcodes produce [`Ir::Jump`].
    pub fn jump(op: OpCode, target: impl Into<String>) -> Self {
        debug_assert!(op.is_jump(), "{} is not a jump", op);
        match op {
            OpCode::Call => Ir::Call(target.into()),
            _ => Ir::Jump {
                op,
                target: target.into(),
            },
        }
    }

    /// The opcode this item encodes, if it is an instruction.
    pub fn opcode(&self) -> Option<OpCode> {
        match self {
            Ir::Op(op) | Ir::Jump { op, .. } => Some(*op),
            Ir::Push(_) => Some(OpCode::Push),
            Ir::Save => Some(OpCode::Save),
            Ir::Load => Some(OpCode::Load),
            Ir::Return => Some(OpCode::Ret),
            Ir::Halt => Some(OpCode::Halt),
            Ir::Call(_) => Some(OpCode::Call),
            Ir::Number(_) | Ir::Label(_) => None,
        }
    }

    /// The label this item transfers control to, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Ir::Jump { target, .. } | Ir::Call(target) => Some(target.as_str()),
            _ => None,
        }
    }

    /// Whether this item starts a new listing line.
    ///
    /// Only a [`Number`](Ir::Number) shares a line, with the `PUSH` before it.
    pub fn starts_line(&self) -> bool {
        !matches!(self, Ir::Number(_))
    }
}

impl fmt::Display for Ir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ir::Op(op) => write!(f, "\t{}", op),
            Ir::Number(value) => write!(f, "{}", value),
            Ir::Push(value) => write!(f, "\t{} {}", OpCode::Push, value),
            Ir::Label(name) => write!(f, "{}:", name),
            Ir::Jump { op, target } => write!(f, "\t{} {}", op, target),
            Ir::Save => write!(f, "\t{}", OpCode::Save),
            Ir::Load => write!(f, "\t{}", OpCode::Load),
            Ir::Return => write!(f, "\t{}", OpCode::Ret),
            Ir::Halt => write!(f, "\t{}", OpCode::Halt),
            Ir::Call(target) => write!(f, "\t{} {}", OpCode::Call, target),
        }
    }
}
