use async_trait::async_trait;

use crate::{AggregateId, EventLogError, EventRecord, Result, Sequence};

/// Core trait for event log implementations.
///
/// The log is the aggregate's storage collaborator: it durably folds each
/// appended record, in the order given, into whatever representation it
/// maintains. Implementations must be thread-safe (Send + Sync). The log
/// assumes a single writer per aggregate id; it is not a concurrency
/// control mechanism.
#[async_trait]
pub trait EventLog: Send + Sync {
    /// Appends records to the log.
    ///
    /// The batch must target a single aggregate and carry contiguous
    /// sequences continuing that aggregate's stream. Records are appended
    /// atomically, preserving the given order.
    ///
    /// Returns the aggregate's new latest sequence.
    async fn append(&self, records: Vec<EventRecord>) -> Result<Sequence>;

    /// Retrieves all records for an aggregate, oldest first.
    async fn records_for_aggregate(&self, aggregate_id: AggregateId) -> Result<Vec<EventRecord>>;

    /// Returns the latest sequence of an aggregate's stream.
    ///
    /// Returns None if the aggregate has no records.
    async fn latest_sequence(&self, aggregate_id: AggregateId) -> Result<Option<Sequence>>;
}

/// Extension trait providing convenience methods for event logs.
#[async_trait]
pub trait EventLogExt: EventLog {
    /// Appends a single record.
    async fn append_record(&self, record: EventRecord) -> Result<Sequence> {
        self.append(vec![record]).await
    }

    /// Checks whether an aggregate has any records.
    async fn aggregate_exists(&self, aggregate_id: AggregateId) -> Result<bool> {
        Ok(self.latest_sequence(aggregate_id).await?.is_some())
    }
}

// Blanket implementation for all EventLog implementations
impl<T: EventLog + ?Sized> EventLogExt for T {}

/// Validates a record batch before appending.
///
/// The batch must be non-empty, target a single aggregate, and carry
/// sequences that increase by one from the first record.
pub fn validate_append(records: &[EventRecord]) -> Result<()> {
    let Some(first) = records.first() else {
        return Err(EventLogError::InvalidAppend(
            "cannot append an empty record batch".to_string(),
        ));
    };

    for record in records.iter().skip(1) {
        if record.aggregate_id != first.aggregate_id {
            return Err(EventLogError::InvalidAppend(
                "all records in a batch must target the same aggregate".to_string(),
            ));
        }
        if record.aggregate_type != first.aggregate_type {
            return Err(EventLogError::InvalidAppend(
                "all records in a batch must share the aggregate type".to_string(),
            ));
        }
    }

    let mut expected = first.sequence;
    for record in records.iter().skip(1) {
        expected = expected.next();
        if record.sequence != expected {
            return Err(EventLogError::InvalidAppend(format!(
                "record sequences must be contiguous: expected {expected}, got {}",
                record.sequence
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventRecord;

    fn record(aggregate_id: AggregateId, sequence: i64) -> EventRecord {
        EventRecord::builder()
            .aggregate_id(aggregate_id)
            .aggregate_type("Book")
            .event_type("TestEvent")
            .sequence(Sequence::new(sequence))
            .payload_raw(serde_json::json!({}))
            .build()
    }

    #[test]
    fn validate_append_rejects_empty_batch() {
        let result = validate_append(&[]);
        assert!(matches!(result, Err(EventLogError::InvalidAppend(_))));
    }

    #[test]
    fn validate_append_rejects_mixed_aggregates() {
        let batch = vec![record(AggregateId::new(), 1), record(AggregateId::new(), 2)];
        let result = validate_append(&batch);
        assert!(matches!(result, Err(EventLogError::InvalidAppend(_))));
    }

    #[test]
    fn validate_append_rejects_sequence_gap() {
        let id = AggregateId::new();
        let batch = vec![record(id, 1), record(id, 3)];
        let result = validate_append(&batch);
        assert!(matches!(result, Err(EventLogError::InvalidAppend(_))));
    }

    #[test]
    fn validate_append_accepts_contiguous_batch() {
        let id = AggregateId::new();
        let batch = vec![record(id, 1), record(id, 2), record(id, 3)];
        assert!(validate_append(&batch).is_ok());
    }
}
