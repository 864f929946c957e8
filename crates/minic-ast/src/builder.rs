//! Arena-backed AST construction.
//!
//! [`AstBuilder`] plays the part of the parser's semantic actions: each
//! method allocates one node (and copies any names) into the arena and
//! returns it by value. Children are moved into the arena as they are
//! attached, so trees are built bottom-up.

use bumpalo::Bump;
use minic_core::Span;

use crate::node::{
    AssignNode, BinaryNode, Body, CallNode, ConditionalNode, DeclareNode, FunctionNode, Ident,
    IntrinsicNode, Leaf, Literal, LoadNode, Node, UnaryNode,
};
use crate::ops::{BinaryOp, Intrinsic, UnaryOp};

/// Builds AST nodes inside a `bumpalo` arena.
///
/// Every node gets the builder's current span; use [`at`](Self::at) to
/// stamp nodes with a real source position.
#[derive(Clone, Copy)]
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
    span: Span,
}

impl<'ast> AstBuilder<'ast> {
    /// Create a builder allocating into `arena`.
    pub fn new(arena: &'ast Bump) -> Self {
        Self {
            arena,
            span: Span::default(),
        }
    }

    /// A copy of this builder that stamps nodes with `span`.
    pub fn at(&self, span: Span) -> Self {
        Self {
            arena: self.arena,
            span,
        }
    }

    fn ident_for(&self, name: &str) -> Ident<'ast> {
        Ident::new(self.arena.alloc_str(name), self.span)
    }

    fn node(&self, node: Node<'ast>) -> &'ast Node<'ast> {
        self.arena.alloc(node)
    }

    // ==========================================================================
    // Leaves
    // ==========================================================================

    /// Integer literal leaf.
    pub fn int(&self, value: i64) -> Node<'ast> {
        Node::Leaf(Leaf::Literal(Literal::Int(value), self.span))
    }

    /// Character literal leaf.
    pub fn char(&self, value: char) -> Node<'ast> {
        Node::Leaf(Leaf::Literal(Literal::Char(value), self.span))
    }

    /// String literal leaf.
    pub fn string(&self, value: &str) -> Node<'ast> {
        let value = self.arena.alloc_str(value);
        Node::Leaf(Leaf::Literal(Literal::Str(value), self.span))
    }

    /// Bare identifier leaf.
    pub fn ident(&self, name: &str) -> Node<'ast> {
        Node::Leaf(Leaf::Ident(self.ident_for(name)))
    }

    // ==========================================================================
    // Expressions
    // ==========================================================================

    /// `left op right`
    pub fn binary(&self, op: BinaryOp, left: Node<'ast>, right: Node<'ast>) -> Node<'ast> {
        Node::Binary(self.arena.alloc(BinaryNode {
            op,
            left: self.node(left),
            right: self.node(right),
            span: self.span,
        }))
    }

    /// `!operand`
    pub fn not(&self, operand: Node<'ast>) -> Node<'ast> {
        Node::Unary(self.arena.alloc(UnaryNode {
            op: UnaryOp::Not,
            operand: self.node(operand),
            span: self.span,
        }))
    }

    /// Read of variable `name`.
    pub fn load(&self, name: &str) -> Node<'ast> {
        Node::Load(LoadNode {
            ident: self.ident_for(name),
        })
    }

    /// `name(args...)`
    pub fn call<I>(&self, name: &str, args: I) -> Node<'ast>
    where
        I: IntoIterator<Item = Node<'ast>>,
    {
        Node::Call(self.arena.alloc(CallNode {
            callee: self.ident_for(name),
            args: self.body(args),
            span: self.span,
        }))
    }

    // ==========================================================================
    // Statements
    // ==========================================================================

    /// `if (condition) { then_branch }`
    pub fn if_(&self, condition: Node<'ast>, then_branch: Body<'ast>) -> Node<'ast> {
        self.conditional(condition, then_branch, None)
    }

    /// `if (condition) { then_branch } else { else_branch }`
    pub fn if_else(
        &self,
        condition: Node<'ast>,
        then_branch: Body<'ast>,
        else_branch: Body<'ast>,
    ) -> Node<'ast> {
        self.conditional(condition, then_branch, Some(else_branch))
    }

    fn conditional(
        &self,
        condition: Node<'ast>,
        then_branch: Body<'ast>,
        else_branch: Option<Body<'ast>>,
    ) -> Node<'ast> {
        Node::Conditional(self.arena.alloc(ConditionalNode {
            condition: self.node(condition),
            then_branch,
            else_branch,
            span: self.span,
        }))
    }

    /// `name = value`
    pub fn assign(&self, name: &str, value: Node<'ast>) -> Node<'ast> {
        Node::Assign(self.arena.alloc(AssignNode {
            target: self.ident_for(name),
            value: self.node(value),
            span: self.span,
        }))
    }

    /// `let name` with no initializer.
    pub fn declare(&self, name: &str) -> Node<'ast> {
        Node::Declare(self.arena.alloc(DeclareNode {
            name: self.ident_for(name),
            init: None,
            span: self.span,
        }))
    }

    /// `let name = value`, desugared into a declaration whose initializer
    /// is the assignment `name = value`.
    pub fn let_(&self, name: &str, value: Node<'ast>) -> Node<'ast> {
        let init = self.node(self.assign(name, value));
        Node::Declare(self.arena.alloc(DeclareNode {
            name: self.ident_for(name),
            init: Some(init),
            span: self.span,
        }))
    }

    /// `fn name() { body }`
    pub fn function(&self, name: &str, body: Body<'ast>) -> Node<'ast> {
        Node::Function(self.arena.alloc(FunctionNode {
            name: self.ident_for(name),
            body,
            span: self.span,
        }))
    }

    /// Print `value` as an integer.
    pub fn print_int(&self, value: Node<'ast>) -> Node<'ast> {
        self.intrinsic(Intrinsic::PrintInt, Some(value))
    }

    /// Print `value` as a character.
    pub fn print_char(&self, value: Node<'ast>) -> Node<'ast> {
        self.intrinsic(Intrinsic::PrintChar, Some(value))
    }

    /// Read one character of input.
    pub fn read_char(&self) -> Node<'ast> {
        self.intrinsic(Intrinsic::ReadChar, None)
    }

    fn intrinsic(&self, intrinsic: Intrinsic, operand: Option<Node<'ast>>) -> Node<'ast> {
        Node::Intrinsic(self.arena.alloc(IntrinsicNode {
            intrinsic,
            operand: operand.map(|node| self.node(node)),
            span: self.span,
        }))
    }

    /// Collect statements into an arena slice, preserving order.
    pub fn body<I>(&self, stmts: I) -> Body<'ast>
    where
        I: IntoIterator<Item = Node<'ast>>,
    {
        bumpalo::collections::Vec::from_iter_in(stmts, self.arena).into_bump_slice()
    }
}
