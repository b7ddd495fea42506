//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

use crate::password::HashingFailed;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An aggregate was not found.
    #[error("aggregate not found: {0}")]
    AggregateNotFound(Uuid),

    /// A genesis event was issued for an aggregate that already has a stream.
    #[error("aggregate already exists: {0}")]
    AggregateAlreadyExists(Uuid),

    /// Optimistic concurrency conflict.
    #[error("concurrency conflict on aggregate {aggregate_id}: expected version {expected}, found {actual}")]
    ConcurrencyConflict {
        /// The aggregate that had the conflict.
        aggregate_id: Uuid,
        /// The expected version.
        expected: i64,
        /// The actual version found.
        actual: i64,
    },

    /// A validation error in command handling.
    #[error("validation error: {0}")]
    Validation(String),

    /// The password could not be sealed, so no event was produced.
    #[error(transparent)]
    HashingFailed(#[from] HashingFailed),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
