//! AST node definitions.
//!
//! Nodes are allocated in a `bumpalo::Bump` arena and borrow from it for
//! `'ast`. Children are arena references; statement lists (blocks and
//! function bodies) are arena slices, kept in source order.

use minic_core::Span;

use crate::ops::{BinaryOp, Intrinsic, UnaryOp};

/// An ordered statement list: a block, a function body or the whole program.
pub type Body<'ast> = &'ast [Node<'ast>];

/// A node of the syntax tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'ast> {
    /// Literal value or bare identifier
    Leaf(Leaf<'ast>),
    /// Binary operation
    Binary(&'ast BinaryNode<'ast>),
    /// Unary prefix operation
    Unary(&'ast UnaryNode<'ast>),
    /// `if (cond) { .. } [else { .. }]`
    Conditional(&'ast ConditionalNode<'ast>),
    /// `name = value`
    Assign(&'ast AssignNode<'ast>),
    /// `let name [= init]`
    Declare(&'ast DeclareNode<'ast>),
    /// Identifier read as a value
    Load(LoadNode<'ast>),
    /// Function definition
    Function(&'ast FunctionNode<'ast>),
    /// Function call
    Call(&'ast CallNode<'ast>),
    /// Built-in I/O operation
    Intrinsic(&'ast IntrinsicNode<'ast>),
}

impl<'ast> Node<'ast> {
    /// Get the span of this node.
    pub fn span(&self) -> Span {
        match self {
            Self::Leaf(Leaf::Literal(_, span)) => *span,
            Self::Leaf(Leaf::Ident(ident)) => ident.span,
            Self::Binary(n) => n.span,
            Self::Unary(n) => n.span,
            Self::Conditional(n) => n.span,
            Self::Assign(n) => n.span,
            Self::Declare(n) => n.span,
            Self::Load(n) => n.ident.span,
            Self::Function(n) => n.span,
            Self::Call(n) => n.span,
            Self::Intrinsic(n) => n.span,
        }
    }

    /// Short name of the node kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Leaf(Leaf::Literal(..)) => "literal",
            Self::Leaf(Leaf::Ident(_)) => "identifier",
            Self::Binary(_) => "binary operator",
            Self::Unary(_) => "unary operator",
            Self::Conditional(_) => "conditional",
            Self::Assign(_) => "assignment",
            Self::Declare(_) => "declaration",
            Self::Load(_) => "load",
            Self::Function(_) => "function definition",
            Self::Call(_) => "function call",
            Self::Intrinsic(_) => "intrinsic",
        }
    }
}

/// An identifier with its source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ident<'ast> {
    /// The identifier text
    pub name: &'ast str,
    /// Source location
    pub span: Span,
}

impl<'ast> Ident<'ast> {
    /// Create an identifier.
    pub fn new(name: &'ast str, span: Span) -> Self {
        Self { name, span }
    }
}

/// A literal value held by a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal<'ast> {
    /// Integer literal
    Int(i64),
    /// Character literal
    Char(char),
    /// String literal
    Str(&'ast str),
}

/// Leaf payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Leaf<'ast> {
    /// Literal value
    Literal(Literal<'ast>, Span),
    /// Bare identifier; expressions reading a variable use [`Node::Load`]
    Ident(Ident<'ast>),
}

/// A binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryNode<'ast> {
    /// Operator
    pub op: BinaryOp,
    /// Left operand
    pub left: &'ast Node<'ast>,
    /// Right operand
    pub right: &'ast Node<'ast>,
    /// Source location
    pub span: Span,
}

/// A unary prefix operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryNode<'ast> {
    /// Operator
    pub op: UnaryOp,
    /// Operand
    pub operand: &'ast Node<'ast>,
    /// Source location
    pub span: Span,
}

/// An if statement.
///
/// Examples:
/// - `if (condition) { .. }`
/// - `if (condition) { .. } else { .. }`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionalNode<'ast> {
    /// Condition
    pub condition: &'ast Node<'ast>,
    /// Then branch
    pub then_branch: Body<'ast>,
    /// Optional else branch
    pub else_branch: Option<Body<'ast>>,
    /// Source location
    pub span: Span,
}

/// An assignment to a declared variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignNode<'ast> {
    /// Variable being written
    pub target: Ident<'ast>,
    /// Value expression
    pub value: &'ast Node<'ast>,
    /// Source location
    pub span: Span,
}

/// A variable declaration.
///
/// The initializer of `let x = e` is the assignment `x = e`, so the
/// declaration itself only introduces the name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeclareNode<'ast> {
    /// Declared name
    pub name: Ident<'ast>,
    /// Optional initializer
    pub init: Option<&'ast Node<'ast>>,
    /// Source location
    pub span: Span,
}

/// A variable read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadNode<'ast> {
    /// Variable being read
    pub ident: Ident<'ast>,
}

/// A function definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionNode<'ast> {
    /// Function name, also its entry label
    pub name: Ident<'ast>,
    /// Statements of the body
    pub body: Body<'ast>,
    /// Source location
    pub span: Span,
}

/// A call to a named function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallNode<'ast> {
    /// Called function
    pub callee: Ident<'ast>,
    /// Argument expressions
    pub args: &'ast [Node<'ast>],
    /// Source location
    pub span: Span,
}

/// A built-in I/O operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntrinsicNode<'ast> {
    /// Which operation
    pub intrinsic: Intrinsic,
    /// Operand, for intrinsics that take one
    pub operand: Option<&'ast Node<'ast>>,
    /// Source location
    pub span: Span,
}
