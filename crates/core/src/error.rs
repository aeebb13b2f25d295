//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing items, arithmetic limits). IO concerns belong in infra.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation at the input boundary (e.g. malformed quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The named item is not tracked by the ledger.
    #[error("item not found: {0}")]
    NotFound(String),

    /// Adjusting the stored quantity would leave the integer range.
    #[error("quantity overflow while adjusting stock for '{item}'")]
    QuantityOverflow { item: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn overflow(item: impl Into<String>) -> Self {
        Self::QuantityOverflow { item: item.into() }
    }
}
