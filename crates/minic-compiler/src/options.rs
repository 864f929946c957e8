//! Compiler configuration.

use crate::labels::LabelStrategy;

/// Options for one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Function label called by the program prologue.
    pub entry_point: String,
    /// How conditional labels are numbered.
    pub label_strategy: LabelStrategy,
    /// Check the assembled program for duplicate or undefined labels.
    pub verify: bool,
}

impl CompilerOptions {
    pub fn new() -> Self {
        Self {
            entry_point: "main".to_string(),
            label_strategy: LabelStrategy::Unique,
            verify: false,
        }
    }

    pub fn with_entry_point<S: Into<String>>(mut self, entry_point: S) -> Self {
        self.entry_point = entry_point.into();
        self
    }

    pub fn with_label_strategy(mut self, strategy: LabelStrategy) -> Self {
        self.label_strategy = strategy;
        self
    }

    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = CompilerOptions::default();
        assert_eq!(options.entry_point, "main");
        assert_eq!(options.label_strategy, LabelStrategy::Unique);
        assert!(!options.verify);
    }

    #[test]
    fn builder_overrides() {
        let options = CompilerOptions::new()
            .with_entry_point("start")
            .with_label_strategy(LabelStrategy::Depth)
            .with_verification(true);
        assert_eq!(options.entry_point, "start");
        assert_eq!(options.label_strategy, LabelStrategy::Depth);
        assert!(options.verify);
    }
}
