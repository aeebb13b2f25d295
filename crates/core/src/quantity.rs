//! Stock quantities.

use crate::error::{DomainError, DomainResult};

/// Signed stock quantity.
///
/// Negative values are valid *arguments* (a decrease routed through `add`),
/// but the ledger never stores a quantity `<= 0`.
pub type Quantity = i64;

/// Parse an untrusted quantity (e.g. user or file input) at the boundary.
pub fn parse_quantity(raw: &str) -> DomainResult<Quantity> {
    raw.trim()
        .parse::<Quantity>()
        .map_err(|e| DomainError::validation(format!("quantity must be an integer, got {raw:?}: {e}")))
}
