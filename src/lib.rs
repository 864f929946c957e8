//! minic - stack-machine backend for the minic language.
//!
//! Takes the syntax tree produced by the minic parser and writes the
//! textual instruction listing the stack machine loads:
//!
//! ```
//! use bumpalo::Bump;
//! use minic::ast::{AstBuilder, BinaryOp};
//! use minic::CompilerOptions;
//!
//! let arena = Bump::new();
//! let ast = AstBuilder::new(&arena);
//! let program = ast.body([ast.function(
//!     "main",
//!     ast.body([ast.print_int(ast.binary(BinaryOp::Add, ast.int(1), ast.int(2)))]),
//! )]);
//!
//! let listing = minic::compile(program, &CompilerOptions::default()).unwrap();
//! assert!(listing.starts_with("\tCALL main\nmain:\n"));
//! assert!(listing.ends_with("\tHALT\n"));
//! ```
//!
//! The crates underneath are re-exported: [`ast`] for tree construction and
//! [`compiler`] for working with IR directly.

use std::io;

use thiserror::Error;
use tracing::instrument;

pub use minic_ast as ast;
pub use minic_compiler as compiler;

pub use minic_compiler::bytecode::listing;
pub use minic_compiler::{
    CompilationError, Compiler, CompilerOptions, Immediate, Ir, LabelStrategy, OpCode, Program,
};
pub use minic_core::Span;

use minic_ast::Body;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the compilation entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// Lowering or verification failed.
    #[error(transparent)]
    Compilation(#[from] CompilationError),

    /// Writing the listing failed.
    #[error("failed to write listing: {0}")]
    Io(#[from] io::Error),
}

/// Lower and assemble `program` without rendering it.
#[instrument(skip_all, fields(statements = program.len(), entry = %options.entry_point))]
pub fn compile_program(program: Body<'_>, options: &CompilerOptions) -> Result<Program> {
    Ok(Compiler::compile(program, options)?)
}

/// Compile `program` to its textual listing.
pub fn compile(program: Body<'_>, options: &CompilerOptions) -> Result<String> {
    compile_program(program, options).map(|program| program.to_listing())
}

/// Compile `program` and write its listing to `writer`.
///
/// The whole listing is built before the first byte is written, so a failed
/// compilation leaves `writer` untouched.
pub fn compile_to_writer<W: io::Write>(
    writer: &mut W,
    program: Body<'_>,
    options: &CompilerOptions,
) -> Result<()> {
    let listing = compile(program, options)?;
    writer.write_all(listing.as_bytes())?;
    writer.flush()?;
    Ok(())
}
