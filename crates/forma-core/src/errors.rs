//! Cross-cutting error types for Forma.
//!
//! Domain-specific errors (`SchemaError`, `DatabaseError`) are defined in
//! their respective crates. Errors converge into `anyhow` in `forma-cli`.

use thiserror::Error;

/// Errors that can be raised by any Forma crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A document identifier is not a syntactically valid native identifier.
    #[error("Invalid ObjectId: {0}")]
    InvalidIdentifier(String),

    /// Data failed validation (blank names, malformed field schemas).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
