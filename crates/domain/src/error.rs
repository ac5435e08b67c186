//! Domain error types.

use event_log::EventLogError;
use thiserror::Error;

use crate::book::{BookError, ProviderError};

/// Errors that can occur during a decide-and-apply invocation.
///
/// Every variant is scoped to the single invocation that raised it; none
/// is fatal to the process, none is retried or suppressed here.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The event log rejected an operation.
    #[error("event log error: {0}")]
    EventLog(#[from] EventLogError),

    /// The book aggregate rejected the command.
    #[error("book error: {0}")]
    Book(#[from] BookError),

    /// A master-data lookup failed.
    #[error("lookup failed: {0}")]
    Provider(#[from] ProviderError),

    /// An event payload failed to (de)serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
