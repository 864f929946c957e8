//! Symbol table mapping identifiers to storage slots.
//!
//! Slots are handed out once, in declaration order, starting at zero, and
//! are never reused. Declaring a name again binds it to a fresh slot; later
//! lookups see the newest binding while earlier code keeps the slot it was
//! compiled against. There is no removal: the table only grows during one
//! compilation.

use std::collections::BTreeMap;
use std::fmt;

use minic_core::{CompilationError, Result, Span};

/// Storage location of a variable in the machine's data area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(pub u32);

impl Slot {
    /// The slot index as the immediate pushed before `LOAD`/`SAVE`.
    pub fn immediate(self) -> i64 {
        i64::from(self.0)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered name-to-slot table for one compilation unit.
#[derive(Debug, Default)]
pub struct SymbolTable {
    /// Every binding of each name, oldest first.
    bindings: BTreeMap<String, Vec<Slot>>,
    next_slot: u32,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to the next unused slot and return it.
    pub fn declare(&mut self, name: &str) -> Slot {
        let slot = Slot(self.next_slot);
        self.next_slot += 1;
        self.bindings.entry(name.to_string()).or_default().push(slot);
        slot
    }

    /// The newest slot bound to `name`.
    ///
    /// # Errors
    ///
    /// [`CompilationError::UndeclaredIdentifier`] when `name` was never
    /// declared; `span` is the use site reported in the diagnostic.
    pub fn resolve(&self, name: &str, span: Span) -> Result<Slot> {
        self.bindings
            .get(name)
            .and_then(|slots| slots.last().copied())
            .ok_or_else(|| CompilationError::undeclared(name, span))
    }

    /// Whether `name` has at least one binding.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Total number of slots handed out.
    pub fn len(&self) -> usize {
        self.next_slot as usize
    }

    /// Whether nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.next_slot == 0
    }

    /// The slot the next declaration will receive.
    pub fn next_slot(&self) -> Slot {
        Slot(self.next_slot)
    }

    /// Names in sorted order, each with its newest slot.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Slot)> + '_ {
        self.bindings
            .iter()
            .filter_map(|(name, slots)| slots.last().map(|slot| (name.as_str(), *slot)))
    }
}
