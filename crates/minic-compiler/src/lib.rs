//! minic Compiler
//!
//! Lowers the minic syntax tree to a stack-machine instruction listing.
//!
//! ## Pipeline
//!
//! - **Lowering**: walk the top-level statements, resolving variables to
//!   storage slots and conditionals to labeled jumps
//! - **Assembly**: wrap the lowered code in `CALL <entry>` ... `HALT`
//! - **Verification** (optional): check every label is defined once and
//!   every jump target exists
//!
//! ## Modules
//!
//! - [`bytecode`]: Instruction set, IR items, programs and listings
//! - [`context`]: Per-compilation state
//! - [`labels`]: Conditional label allocation
//! - [`lower`]: AST lowering
//! - [`options`]: Compiler configuration
//! - [`symbols`]: Identifier to slot mapping
//! - [`verify`]: Label verification of assembled programs

pub mod bytecode;
pub mod context;
pub mod labels;
pub mod lower;
pub mod options;
pub mod symbols;
pub mod verify;

pub use bytecode::{Immediate, Ir, OpCode, Program};
pub use context::CompilationContext;
pub use labels::{ConditionalLabels, LabelAllocator, LabelStrategy};
pub use lower::Lowerer;
pub use options::CompilerOptions;
pub use symbols::{Slot, SymbolTable};
pub use verify::verify_program;

// Re-export CompilationError from core for convenience
pub use minic_core::{CompilationError, Result};

use minic_ast::Body;
use tracing::debug;

/// The main compiler entry point.
pub struct Compiler;

impl Compiler {
    /// Compile top-level statements into a complete program.
    ///
    /// A fresh [`CompilationContext`] is used for every call. When
    /// `options.verify` is set the assembled program is checked with
    /// [`verify_program`] before it is returned.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn compile(program: Body<'_>, options: &CompilerOptions) -> Result<Program> {
        let mut ctx = CompilationContext::new(options.label_strategy);
        let body = Lowerer::new(&mut ctx).lower_program(program)?;
        let assembled = Program::assemble(&options.entry_point, body);

        debug!(
            statements = program.len(),
            items = assembled.len(),
            slots = ctx.symbols.len(),
            "compiled program"
        );

        if options.verify {
            verify_program(&assembled)?;
        }
        Ok(assembled)
    }
}
