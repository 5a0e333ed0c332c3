use thiserror::Error;
use uuid::Uuid;

/// Error type that captures the failures surfaced by the core.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Malformed input: non-positive amount, empty text, inverted date
    /// range, or a duplicate (category, period) budget. Never silently
    /// corrected.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// Percent change with a zero baseline and a nonzero current value.
    #[error("Percent change undefined: previous value is zero")]
    DivisionUndefined,
    /// A targeted budget evaluation referenced an unknown budget id.
    #[error("Budget not found: {0}")]
    BudgetNotFound(Uuid),
}

/// Convenience alias used throughout the service layer.
pub type CoreResult<T> = Result<T, CoreError>;
