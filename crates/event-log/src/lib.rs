//! Append-only log of domain events.
//!
//! Every aggregate mutation ends with an ordered batch of event records
//! being appended here. The log is the storage collaborator's boundary:
//! how records are durably folded is up to the implementation, and the
//! in-memory one exists for tests.

pub mod error;
pub mod memory;
pub mod record;
pub mod store;

pub use common::AggregateId;
pub use error::{EventLogError, Result};
pub use memory::InMemoryEventLog;
pub use record::{EventId, EventRecord, EventRecordBuilder, Sequence};
pub use store::{EventLog, EventLogExt, validate_append};
