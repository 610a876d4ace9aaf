//! cmp-model: performance measure hierarchy and selection state.

pub mod hierarchy;
pub mod selection;

pub use hierarchy::{Goal, Hierarchy, Indicator, Measure};
pub use selection::SelectionState;

pub type SelectionResult<T> = Result<T, SelectionError>;

/// Invalid goal/measure selections are contract violations: every selectable
/// name originates from the hierarchy itself, so these surface programming
/// errors rather than user-facing failures.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown goal: {0}")]
    UnknownGoal(String),

    #[error("Measure {measure} does not belong to goal {goal}")]
    MeasureNotInGoal { goal: String, measure: String },

    #[error("No goal is active")]
    NoActiveGoal,
}
