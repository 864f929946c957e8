//! AST lowering for minic.
//!
//! The [`Lowerer`] walks the tree recursively and appends IR items in
//! program order:
//! - Leaves push their literal value
//! - Operators evaluate the right operand, then the left, then apply
//! - Conditionals become labeled jump diamonds (see [`conditional`])
//! - Declarations, assignments and loads go through the symbol table
//! - Function definitions become a label, their body and `RET`
//!
//! Lowering stops at the first error; nothing partial is returned.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use minic_ast::AstBuilder;
//! use minic_compiler::{CompilationContext, LabelStrategy, Lowerer};
//!
//! let arena = Bump::new();
//! let ast = AstBuilder::new(&arena);
//! let mut ctx = CompilationContext::new(LabelStrategy::Unique);
//!
//! let items = Lowerer::new(&mut ctx).lower(&ast.int(7), 0).unwrap();
//! assert_eq!(items.len(), 2);
//! ```

mod conditional;
mod function;
mod variables;

use minic_ast::{BinaryOp, Body, Intrinsic, IntrinsicNode, Leaf, Literal, Node, UnaryOp};
use minic_core::{CompilationError, Result, Span};
use tracing::trace;

use crate::bytecode::{Immediate, Ir, OpCode};
use crate::context::CompilationContext;

/// Lowers AST nodes to IR items.
///
/// Holds the compilation context for the duration of one compilation, so
/// every node sees the declarations and labels of the nodes before it.
pub struct Lowerer<'a> {
    ctx: &'a mut CompilationContext,
}

impl<'a> Lowerer<'a> {
    pub fn new(ctx: &'a mut CompilationContext) -> Self {
        Self { ctx }
    }

    /// Lower the top-level statements of a program.
    ///
    /// Each statement starts at the label allocator's base depth, which has
    /// moved past every depth used by the statements before it.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn lower_program(&mut self, program: Body<'_>) -> Result<Vec<Ir>> {
        let mut out = Vec::new();
        for stmt in program {
            let depth = self.ctx.labels.base_depth();
            self.lower_into(stmt, depth, &mut out)?;
        }
        Ok(out)
    }

    /// Lower a statement list, concatenating results in order.
    pub fn lower_body(&mut self, body: Body<'_>, depth: u32) -> Result<Vec<Ir>> {
        let mut out = Vec::new();
        self.lower_body_into(body, depth, &mut out)?;
        Ok(out)
    }

    /// Lower a single node at nesting `depth`.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn lower(&mut self, node: &Node<'_>, depth: u32) -> Result<Vec<Ir>> {
        let mut out = Vec::new();
        self.lower_into(node, depth, &mut out)?;
        Ok(out)
    }

    fn lower_body_into(&mut self, body: Body<'_>, depth: u32, out: &mut Vec<Ir>) -> Result<()> {
        for stmt in body {
            self.lower_into(stmt, depth, out)?;
        }
        Ok(())
    }

    fn lower_into(&mut self, node: &Node<'_>, depth: u32, out: &mut Vec<Ir>) -> Result<()> {
        match node {
            Node::Leaf(leaf) => lower_leaf(leaf, out)?,
            Node::Binary(binary) => {
                self.lower_into(binary.right, depth, out)?;
                self.lower_into(binary.left, depth, out)?;
                out.push(Ir::Op(binary_opcode(binary.op)));
            }
            Node::Unary(unary) => {
                self.lower_into(unary.operand, depth, out)?;
                out.push(Ir::Op(unary_opcode(unary.op)));
            }
            Node::Conditional(cond) => self.lower_conditional(cond, depth, out)?,
            Node::Assign(assign) => self.lower_assign(assign, depth, out)?,
            Node::Declare(decl) => self.lower_declare(decl, depth, out)?,
            Node::Load(load) => self.lower_load(load, out)?,
            Node::Function(func) => self.lower_function(func, depth, out)?,
            Node::Call(call) => self.lower_call(call),
            Node::Intrinsic(intrinsic) => self.lower_intrinsic(intrinsic, depth, out)?,
        }
        self.ctx.labels.observe(depth);
        Ok(())
    }

    fn lower_intrinsic(
        &mut self,
        node: &IntrinsicNode<'_>,
        depth: u32,
        out: &mut Vec<Ir>,
    ) -> Result<()> {
        match (node.intrinsic.takes_operand(), node.operand) {
            (true, Some(operand)) => self.lower_into(operand, depth, out)?,
            (false, None) => {}
            _ => return Err(unsupported("intrinsic arity", node.span)),
        }
        trace!(intrinsic = node.intrinsic.name(), "lowering intrinsic");
        out.push(Ir::Op(intrinsic_opcode(node.intrinsic)));
        Ok(())
    }
}

// ==========================================================================
// Leaves and operators
// ==========================================================================

fn lower_leaf(leaf: &Leaf<'_>, out: &mut Vec<Ir>) -> Result<()> {
    let value = match leaf {
        Leaf::Literal(Literal::Int(value), _) => Immediate::Int(*value),
        Leaf::Literal(Literal::Char(value), _) => Immediate::Char(*value),
        Leaf::Literal(Literal::Str(_), span) => return Err(unsupported("string literal", *span)),
        Leaf::Ident(ident) => return Err(unsupported("bare identifier", ident.span)),
    };
    out.push(Ir::Op(OpCode::Push));
    out.push(Ir::Number(value));
    Ok(())
}

fn unsupported(kind: &'static str, span: Span) -> CompilationError {
    CompilationError::UnsupportedNodeKind { kind, span }
}

/// The instruction applying `op` to the two topmost stack values.
pub fn binary_opcode(op: BinaryOp) -> OpCode {
    match op {
        BinaryOp::Add => OpCode::Add,
        BinaryOp::Sub => OpCode::Sub,
        BinaryOp::Mul => OpCode::Mul,
        BinaryOp::Div => OpCode::Div,
        BinaryOp::Mod => OpCode::Mod,
        BinaryOp::Equal => OpCode::Eq,
        BinaryOp::NotEqual => OpCode::Ne,
        BinaryOp::Less => OpCode::Lt,
        BinaryOp::Greater => OpCode::Gt,
        BinaryOp::LessEqual => OpCode::Le,
        BinaryOp::GreaterEqual => OpCode::Ge,
    }
}

fn unary_opcode(op: UnaryOp) -> OpCode {
    match op {
        UnaryOp::Not => OpCode::Not,
    }
}

fn intrinsic_opcode(intrinsic: Intrinsic) -> OpCode {
    match intrinsic {
        Intrinsic::PrintInt => OpCode::PrintI,
        Intrinsic::PrintChar => OpCode::PrintC,
        Intrinsic::ReadChar => OpCode::ReadC,
    }
}
