use thiserror::Error;

use crate::{AggregateId, Sequence};

/// Errors that can occur when interacting with the event log.
#[derive(Debug, Error)]
pub enum EventLogError {
    /// The record batch itself was malformed (empty, mixed aggregates,
    /// or non-contiguous sequences within the batch).
    #[error("invalid append: {0}")]
    InvalidAppend(String),

    /// The batch does not continue the aggregate's stream where it left
    /// off. With a single writer per aggregate this indicates a bug in
    /// the caller, not a lost race.
    #[error(
        "sequence conflict for aggregate {aggregate_id}: expected {expected}, got {found}"
    )]
    SequenceConflict {
        aggregate_id: AggregateId,
        expected: Sequence,
        found: Sequence,
    },

    /// A serialization/deserialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for event log operations.
pub type Result<T> = std::result::Result<T, EventLogError>;
