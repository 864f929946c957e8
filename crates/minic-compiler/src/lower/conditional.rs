//! Conditional lowering.
//!
//! Handles if statements with and without an else branch. The condition,
//! both branches and everything nested in them are lowered one level deeper
//! than the conditional itself.

use minic_ast::ConditionalNode;
use minic_core::Result;
use tracing::trace;

use crate::bytecode::{Ir, OpCode};

use super::Lowerer;

impl<'a> Lowerer<'a> {
    /// Lower an if statement.
    ///
    /// Layout with an else branch:
    /// ```text
    /// [condition]
    /// JZ _else_K
    /// _if_K:
    /// [then branch]
    /// J _end_if_K
    /// _else_K:
    /// [else branch]
    /// _end_if_K:
    /// ```
    ///
    /// Without one, the `JZ` targets `_end_if_K` and the `J` and else
    /// definition are left out.
    pub(super) fn lower_conditional(
        &mut self,
        cond: &ConditionalNode<'_>,
        depth: u32,
        out: &mut Vec<Ir>,
    ) -> Result<()> {
        let labels = self.ctx.labels.allocate(depth);
        trace!(id = labels.id, depth, "allocated conditional labels");
        let inner = depth + 1;

        self.lower_into(cond.condition, inner, out)?;

        let false_target = match cond.else_branch {
            Some(_) => &labels.else_label,
            None => &labels.end_label,
        };
        out.push(Ir::jump(OpCode::Jz, false_target.as_str()));
        out.push(Ir::label(labels.if_label.as_str()));

        self.lower_body_into(cond.then_branch, inner, out)?;

        if let Some(else_branch) = cond.else_branch {
            out.push(Ir::jump(OpCode::J, labels.end_label.as_str()));
            out.push(Ir::label(labels.else_label.as_str()));
            self.lower_body_into(else_branch, inner, out)?;
        }

        out.push(Ir::Label(labels.end_label));
        self.ctx.labels.observe(inner);
        Ok(())
    }
}
