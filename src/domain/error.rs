//! Domain errors

use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Error)]
pub enum DomainError {
    /// No booking matches the given id
    #[error("Booking not found: {0}")]
    NotFound(String),

    /// Missing or empty required field, or malformed identifier
    #[error("{0}")]
    Validation(String),

    /// The storage collaborator failed to execute the operation
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── Tests ──────────────────────────────────────────────────────
