//! Syntax tree for the minic language.
//!
//! The parser is an external collaborator: it hands the backend a slice of
//! top-level [`Node`]s allocated in a [`bumpalo::Bump`] arena. This crate
//! defines that shape and an [`AstBuilder`] for constructing trees by hand.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use minic_ast::{AstBuilder, BinaryOp};
//!
//! let arena = Bump::new();
//! let ast = AstBuilder::new(&arena);
//!
//! // let x = 1; x = x + 2;
//! let program = ast.body([
//!     ast.let_("x", ast.int(1)),
//!     ast.assign("x", ast.binary(BinaryOp::Add, ast.load("x"), ast.int(2))),
//! ]);
//! assert_eq!(program.len(), 2);
//! ```

mod builder;
mod node;
mod ops;

pub use builder::AstBuilder;
pub use node::{
    AssignNode, BinaryNode, Body, CallNode, ConditionalNode, DeclareNode, FunctionNode, Ident,
    IntrinsicNode, Leaf, Literal, LoadNode, Node, UnaryNode,
};
pub use ops::{BinaryOp, Intrinsic, UnaryOp};

pub use minic_core::Span;
