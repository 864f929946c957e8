//! Function definition and call lowering.

use minic_ast::{CallNode, FunctionNode};
use minic_core::Result;
use tracing::debug;

use crate::bytecode::Ir;

use super::Lowerer;

impl<'a> Lowerer<'a> {
    /// Layout:
    /// ```text
    /// name:
    /// [body statements]
    /// RET
    /// ```
    ///
    /// The name also takes a storage slot, which nothing reads.
    pub(super) fn lower_function(
        &mut self,
        func: &FunctionNode<'_>,
        depth: u32,
        out: &mut Vec<Ir>,
    ) -> Result<()> {
        let name = func.name.name;
        let slot = self.ctx.symbols.declare(name);
        debug!(function = name, %slot, statements = func.body.len(), "lowering function");

        out.push(Ir::label(name));
        self.lower_body_into(func.body, depth, out)?;
        out.push(Ir::Return);
        Ok(())
    }

    /// Calls emit nothing: there is no argument passing convention yet, so
    /// neither the call nor its arguments are lowered.
    pub(super) fn lower_call(&mut self, call: &CallNode<'_>) {
        debug!(
            callee = call.callee.name,
            args = call.args.len(),
            "skipping function call"
        );
    }
}
