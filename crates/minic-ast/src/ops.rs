//! Operator definitions for minic expressions.

use std::fmt;

/// Binary operators.
///
/// The set is closed: every variant lowers to exactly one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
}

impl BinaryOp {
    /// Every binary operator, in declaration order.
    pub const ALL: [BinaryOp; 11] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
        BinaryOp::Equal,
        BinaryOp::NotEqual,
        BinaryOp::Less,
        BinaryOp::Greater,
        BinaryOp::LessEqual,
        BinaryOp::GreaterEqual,
    ];

    /// Whether swapping the operands leaves the result unchanged.
    pub fn is_commutative(&self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Mul | BinaryOp::Equal | BinaryOp::NotEqual
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOp::*;
        let s = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
        };
        write!(f, "{}", s)
    }
}

/// Unary prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `!`
    Not,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "!"),
        }
    }
}

/// Built-in I/O operations that map directly onto VM instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    /// Print the operand as an integer.
    PrintInt,
    /// Print the operand as a character.
    PrintChar,
    /// Read one character from input onto the stack.
    ReadChar,
}

impl Intrinsic {
    /// Whether the intrinsic consumes an operand expression.
    pub fn takes_operand(&self) -> bool {
        !matches!(self, Intrinsic::ReadChar)
    }

    /// Source-level name of the intrinsic.
    pub fn name(&self) -> &'static str {
        match self {
            Intrinsic::PrintInt => "printi",
            Intrinsic::PrintChar => "printc",
            Intrinsic::ReadChar => "readc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_commutative_operators() {
        let sensitive: Vec<_> = BinaryOp::ALL
            .iter()
            .filter(|op| !op.is_commutative())
            .copied()
            .collect();
        assert!(sensitive.contains(&BinaryOp::Sub));
        assert!(sensitive.contains(&BinaryOp::Div));
        assert!(sensitive.contains(&BinaryOp::Less));
        assert!(!sensitive.contains(&BinaryOp::Add));
    }

    #[test]
    fn operator_display() {
        assert_eq!(BinaryOp::GreaterEqual.to_string(), ">=");
        assert_eq!(BinaryOp::Mod.to_string(), "%");
        assert_eq!(UnaryOp::Not.to_string(), "!");
    }

    #[test]
    fn read_char_takes_no_operand() {
        assert!(!Intrinsic::ReadChar.takes_operand());
        assert!(Intrinsic::PrintChar.takes_operand());
    }
}
