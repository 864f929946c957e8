//! CompilationContext - mutable state for one compilation.

use crate::labels::{LabelAllocator, LabelStrategy};
use crate::symbols::SymbolTable;

/// Symbol table and label allocator for one translation unit.
///
/// A fresh context is created for every compilation, so two runs never
/// share slots or labels.
#[derive(Debug, Default)]
pub struct CompilationContext {
    pub symbols: SymbolTable,
    pub labels: LabelAllocator,
}

impl CompilationContext {
    pub fn new(strategy: LabelStrategy) -> Self {
        Self {
            symbols: SymbolTable::new(),
            labels: LabelAllocator::new(strategy),
        }
    }
}
