//! Variable declaration, assignment and load lowering.

use minic_ast::{AssignNode, DeclareNode, LoadNode};
use minic_core::Result;
use tracing::trace;

use crate::bytecode::Ir;

use super::Lowerer;

impl<'a> Lowerer<'a> {
    /// Bind the name to a fresh slot, then lower the initializer.
    ///
    /// A declaration emits nothing of its own; `let x = e` carries the
    /// assignment `x = e` as its initializer.
    pub(super) fn lower_declare(
        &mut self,
        decl: &DeclareNode<'_>,
        depth: u32,
        out: &mut Vec<Ir>,
    ) -> Result<()> {
        let slot = self.ctx.symbols.declare(decl.name.name);
        trace!(name = decl.name.name, %slot, "declared variable");

        if let Some(init) = decl.init {
            self.lower_into(init, depth, out)?;
        }
        Ok(())
    }

    /// Layout:
    /// ```text
    /// [value]
    /// PUSH <slot>
    /// SAVE
    /// ```
    ///
    /// The target is resolved before the value is lowered.
    pub(super) fn lower_assign(
        &mut self,
        assign: &AssignNode<'_>,
        depth: u32,
        out: &mut Vec<Ir>,
    ) -> Result<()> {
        let slot = self
            .ctx
            .symbols
            .resolve(assign.target.name, assign.target.span)?;
        self.lower_into(assign.value, depth, out)?;
        out.push(Ir::Push(slot.immediate()));
        out.push(Ir::Save);
        Ok(())
    }

    /// Layout:
    /// ```text
    /// PUSH <slot>
    /// LOAD
    /// ```
    pub(super) fn lower_load(&mut self, load: &LoadNode<'_>, out: &mut Vec<Ir>) -> Result<()> {
        let slot = self.ctx.symbols.resolve(load.ident.name, load.ident.span)?;
        out.push(Ir::Push(slot.immediate()));
        out.push(Ir::Load);
        Ok(())
    }
}
