//! Program verification: structural validation of label usage.
//!
//! Catches lowering output the machine could not run unambiguously: a label
//! defined twice, or a jump or call whose target is never defined.

use minic_core::{CompilationError, Result};
use rustc_hash::FxHashSet;

use crate::bytecode::{Ir, Program};

/// Verify label definitions and targets of `program`.
///
/// Returns the first error found, or `Ok(())` when every label is defined
/// exactly once and every target is defined. Duplicates are reported before
/// undefined targets.
pub fn verify_program(program: &Program) -> Result<()> {
    let defined = check_definitions(program.items())?;
    check_targets(program.items(), &defined)
}

fn check_definitions(items: &[Ir]) -> Result<FxHashSet<&str>> {
    let mut defined = FxHashSet::default();
    for ir in items {
        if let Ir::Label(name) = ir {
            if !defined.insert(name.as_str()) {
                return Err(CompilationError::DuplicateLabel {
                    label: name.clone(),
                });
            }
        }
    }
    Ok(defined)
}

fn check_targets(items: &[Ir], defined: &FxHashSet<&str>) -> Result<()> {
    match items
        .iter()
        .filter_map(Ir::target)
        .find(|target| !defined.contains(target))
    {
        Some(target) => Err(CompilationError::UndefinedLabel {
            label: target.to_string(),
        }),
        None => Ok(()),
    }
}
