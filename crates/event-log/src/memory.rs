use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    AggregateId, EventLogError, EventRecord, Result, Sequence,
    store::{EventLog, validate_append},
};

/// In-memory event log used by tests.
///
/// Keeps every appended record in insertion order and offers the same
/// contract as a durable implementation.
#[derive(Clone, Default)]
pub struct InMemoryEventLog {
    records: Arc<RwLock<Vec<EventRecord>>>,
}

impl InMemoryEventLog {
    /// Creates a new empty in-memory log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of records stored.
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Clears all records.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl EventLog for InMemoryEventLog {
    async fn append(&self, records: Vec<EventRecord>) -> Result<Sequence> {
        validate_append(&records)?;

        let first = &records[0];
        let aggregate_id = first.aggregate_id;

        let mut log = self.records.write().await;

        let current = log
            .iter()
            .filter(|r| r.aggregate_id == aggregate_id)
            .map(|r| r.sequence)
            .max()
            .unwrap_or(Sequence::initial());

        if first.sequence != current.next() {
            return Err(EventLogError::SequenceConflict {
                aggregate_id,
                expected: current.next(),
                found: first.sequence,
            });
        }

        let last = records
            .last()
            .map(|r| r.sequence)
            .unwrap_or(Sequence::initial());
        log.extend(records);

        Ok(last)
    }

    async fn records_for_aggregate(&self, aggregate_id: AggregateId) -> Result<Vec<EventRecord>> {
        let log = self.records.read().await;
        let mut records: Vec<_> = log
            .iter()
            .filter(|r| r.aggregate_id == aggregate_id)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.sequence);
        Ok(records)
    }

    async fn latest_sequence(&self, aggregate_id: AggregateId) -> Result<Option<Sequence>> {
        let log = self.records.read().await;
        let latest = log
            .iter()
            .filter(|r| r.aggregate_id == aggregate_id)
            .map(|r| r.sequence)
            .max();
        Ok(latest)
    }
}
