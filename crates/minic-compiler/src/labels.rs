//! Label allocation for conditional regions.
//!
//! Each conditional gets three names sharing one suffix `K`: the else
//! target `_else_K`, the informational `_if_K`, and the end target
//! `_end_if_K`. How `K` is chosen is controlled by [`LabelStrategy`].

/// How the numeric suffix of conditional labels is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStrategy {
    /// A counter that increases with every conditional. Never collides.
    #[default]
    Unique,
    /// The nesting depth of the conditional.
    ///
    /// Reproduces the historical listings byte for byte. Two sibling
    /// conditionals inside one body get the same suffix and so define the
    /// same labels twice.
    Depth,
}

/// The labels of one conditional region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalLabels {
    /// The shared suffix.
    pub id: u32,
    /// Target of the `JZ` when an else branch exists, and its definition.
    pub else_label: String,
    /// Definition at the start of the then branch. Never jumped to.
    pub if_label: String,
    /// Target of the skip-over jump, defined after the whole region.
    pub end_label: String,
}

impl ConditionalLabels {
    fn with_id(id: u32) -> Self {
        Self {
            id,
            else_label: format!("_else_{}", id),
            if_label: format!("_if_{}", id),
            end_label: format!("_end_if_{}", id),
        }
    }
}

/// Hands out conditional labels for one compilation.
#[derive(Debug, Default)]
pub struct LabelAllocator {
    strategy: LabelStrategy,
    /// Next suffix under [`LabelStrategy::Unique`].
    next_id: u32,
    /// Largest depth reported through [`observe`](Self::observe).
    largest_depth: u32,
}

impl LabelAllocator {
    /// Create an allocator using `strategy`.
    pub fn new(strategy: LabelStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// The strategy in use.
    pub fn strategy(&self) -> LabelStrategy {
        self.strategy
    }

    /// Labels for a conditional lowered at nesting `depth`.
    pub fn allocate(&mut self, depth: u32) -> ConditionalLabels {
        let id = match self.strategy {
            LabelStrategy::Unique => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
            LabelStrategy::Depth => depth,
        };
        ConditionalLabels::with_id(id)
    }

    /// Record that lowering reached `depth`.
    pub fn observe(&mut self, depth: u32) {
        self.largest_depth = self.largest_depth.max(depth);
    }

    /// Depth at which the next top-level statement starts.
    pub fn base_depth(&self) -> u32 {
        self.largest_depth
    }
}
