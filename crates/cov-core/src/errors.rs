//! Cross-cutting error types for Covenant.
//!
//! Grounding rule violations are never errors: they are reported as data in
//! the validator's result types. `CoreError` covers the few places where a
//! value cannot be constructed at all (out-of-range tier, unknown role token).

use thiserror::Error;

/// Errors that can be raised by any Covenant crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, range, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
