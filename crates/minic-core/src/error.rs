//! Error types for the minic compiler.
//!
//! Every error here is fatal: lowering stops at the first one and no
//! partial program is produced.
//!
//! ```text
//! CompilationError
//! ├── UndeclaredIdentifier  - read or write of a name with no declaration
//! ├── UnsupportedNodeKind   - AST shape the backend cannot lower
//! ├── DuplicateLabel        - verifier: label defined twice
//! ├── UndefinedLabel        - verifier: jump or call to a missing label
//! └── MalformedListing      - listing decoder: unreadable instruction line
//! ```

use std::fmt;

use thiserror::Error;

use crate::Span;

/// Convenience alias used across the compiler crates.
pub type Result<T> = std::result::Result<T, CompilationError>;

/// `at L:C: ` for spans from source text, nothing for synthetic ones.
struct Location(Span);

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_synthetic() {
            Ok(())
        } else {
            write!(f, "at {}: ", self.0)
        }
    }
}

fn location(span: &Span) -> Location {
    Location(*span)
}

/// Errors raised while compiling a program to stack-machine code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilationError {
    /// A name was read or assigned before any declaration of it.
    #[error("{}identifier '{name}' has not been declared", location(.span))]
    UndeclaredIdentifier {
        /// The identifier that failed to resolve.
        name: String,
        /// Where the identifier was used.
        span: Span,
    },

    /// The AST contains a node the lowering engine does not handle.
    ///
    /// This points at a defect in whatever built the tree, not at the
    /// user's program.
    #[error("{}unsupported {kind}", location(.span))]
    UnsupportedNodeKind {
        /// Short description of the offending node.
        kind: &'static str,
        /// Where the node came from.
        span: Span,
    },

    /// The same label is defined more than once in a program.
    #[error("label '{label}' is defined more than once")]
    DuplicateLabel {
        /// The repeated label name.
        label: String,
    },

    /// A jump or call refers to a label the program never defines.
    #[error("'{label}' is targeted but never defined")]
    UndefinedLabel {
        /// The missing label name.
        label: String,
    },

    /// A line of a textual listing could not be decoded.
    #[error("listing line {line}: {detail}")]
    MalformedListing {
        /// 1-based line number in the listing.
        line: usize,
        /// What was wrong with the line.
        detail: String,
    },
}

impl CompilationError {
    /// Get the source span of this error, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            CompilationError::UndeclaredIdentifier { span, .. } => Some(*span),
            CompilationError::UnsupportedNodeKind { span, .. } => Some(*span),
            CompilationError::DuplicateLabel { .. }
            | CompilationError::UndefinedLabel { .. }
            | CompilationError::MalformedListing { .. } => None,
        }
    }

    /// Shorthand for an [`UndeclaredIdentifier`](Self::UndeclaredIdentifier) error.
    pub fn undeclared(name: impl Into<String>, span: Span) -> Self {
        CompilationError::UndeclaredIdentifier {
            name: name.into(),
            span,
        }
    }

    /// Shorthand for a [`MalformedListing`](Self::MalformedListing) error.
    pub fn malformed(line: usize, detail: impl Into<String>) -> Self {
        CompilationError::MalformedListing {
            line,
            detail: detail.into(),
        }
    }
}
