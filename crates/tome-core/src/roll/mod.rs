//! Roll records and the per-character roll history.

pub mod history;

pub use history::RollHistory;

use std::fmt;

/// One resolved check: a base die result plus an applied modifier.
///
/// Immutable once built; the final outcome is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll {
    label: String,
    base_result: i32,
    applied_modifier: i32,
    final_outcome: i32,
}

impl Roll {
    /// Record a roll. `label` names the check, e.g. `"STEALTH check"`.
    pub fn new(label: impl Into<String>, base_result: i32, applied_modifier: i32) -> Self {
        Self {
            label: label.into(),
            base_result,
            applied_modifier,
            final_outcome: base_result.saturating_add(applied_modifier),
        }
    }

    /// What was rolled for.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The die result before modifiers.
    pub fn base_result(&self) -> i32 {
        self.base_result
    }

    /// The total modifier applied.
    pub fn applied_modifier(&self) -> i32 {
        self.applied_modifier
    }

    /// `base_result + applied_modifier`.
    pub fn final_outcome(&self) -> i32 {
        self.final_outcome
    }

    /// Human-readable summary of the roll.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Rolled a {} with a modifier of {}. Final result: {}",
            self.label, self.base_result, self.applied_modifier, self.final_outcome
        )
    }
}
