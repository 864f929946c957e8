//! Shared types for the minic compiler crates.
//!
//! - [`Span`]: source positions carried by AST nodes and diagnostics
//! - [`CompilationError`]: every fatal condition raised while lowering,
//!   verifying or decoding a program

mod error;
mod span;

pub use error::{CompilationError, Result};
pub use span::Span;
