//! The decide-and-apply protocol.
//!
//! Every business operation goes through the same cycle: load the
//! current aggregate from its event stream, run one decision against it,
//! append the resulting events in emission order, fold them into the
//! in-memory aggregate. The aggregate itself never touches storage.

use std::marker::PhantomData;

use common::AggregateId;
use event_log::{EventLog, EventRecord, Sequence};

use crate::aggregate::{Aggregate, DomainEvent};
use crate::error::DomainError;

/// Result of a decide-and-apply invocation.
#[derive(Debug)]
pub struct CommandResult<A: Aggregate> {
    /// The aggregate after folding the new events.
    pub aggregate: A,

    /// The events produced by the decision, in emission order.
    pub events: Vec<A::Event>,

    /// The aggregate's sequence after the append.
    pub new_sequence: Sequence,
}

/// Trait for commands targeting an aggregate.
///
/// A command is an intention; the aggregate may reject it when its
/// current state does not allow the action.
pub trait Command: Send + Sync {
    /// The aggregate this command targets.
    type Aggregate: Aggregate;

    /// Returns the id of the targeted aggregate.
    fn aggregate_id(&self) -> AggregateId;
}

/// Executes decisions against aggregates.
///
/// The handler owns the protocol: it guarantees the decision runs
/// exactly once against the loaded state, that exactly the events the
/// decision produced reach the log, in order, and that an error from
/// the decision or the log leaves nothing appended.
pub struct CommandHandler<S, A>
where
    S: EventLog,
    A: Aggregate,
{
    log: S,
    _phantom: PhantomData<A>,
}

impl<S, A> CommandHandler<S, A>
where
    S: EventLog,
    A: Aggregate,
{
    /// Creates a handler over the given event log.
    pub fn new(log: S) -> Self {
        Self {
            log,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the underlying event log.
    pub fn log(&self) -> &S {
        &self.log
    }

    /// Loads an aggregate by folding its recorded events.
    ///
    /// An aggregate with no records loads as `A::default()`, which is
    /// how draft creation finds its blank slate. Reconstruction is a
    /// pure function of the record list.
    pub async fn load(&self, aggregate_id: AggregateId) -> Result<A, DomainError> {
        let records = self.log.records_for_aggregate(aggregate_id).await?;

        let mut aggregate = A::default();
        for record in records {
            let event: A::Event = serde_json::from_value(record.payload)?;
            aggregate.apply(event);
            aggregate.set_sequence(record.sequence);
        }

        Ok(aggregate)
    }

    /// Loads an aggregate, returning None if it has never been created.
    pub async fn load_existing(&self, aggregate_id: AggregateId) -> Result<Option<A>, DomainError> {
        let aggregate = self.load(aggregate_id).await?;
        if aggregate.id().is_some() {
            Ok(Some(aggregate))
        } else {
            Ok(None)
        }
    }

    /// Runs a decision against the current aggregate and appends the
    /// events it produces.
    ///
    /// The decision is invoked exactly once. If it returns no events,
    /// nothing is appended. If it (or the append) fails, the error
    /// propagates unchanged and no partial state is visible anywhere.
    pub async fn execute<F>(
        &self,
        aggregate_id: AggregateId,
        decide: F,
    ) -> Result<CommandResult<A>, DomainError>
    where
        F: FnOnce(&A) -> Result<Vec<A::Event>, A::Error>,
        DomainError: From<A::Error>,
    {
        let mut aggregate = self.load(aggregate_id).await?;
        let current_sequence = aggregate.sequence();

        let events = decide(&aggregate)?;

        if events.is_empty() {
            return Ok(CommandResult {
                aggregate,
                events: vec![],
                new_sequence: current_sequence,
            });
        }

        let records = self.build_records(aggregate_id, current_sequence, &events)?;
        let new_sequence = self.log.append(records).await?;

        for event in &events {
            aggregate.apply(event.clone());
        }
        aggregate.set_sequence(new_sequence);

        Ok(CommandResult {
            aggregate,
            events,
            new_sequence,
        })
    }

    /// Wraps domain events into log records with contiguous sequences.
    fn build_records(
        &self,
        aggregate_id: AggregateId,
        current_sequence: Sequence,
        events: &[A::Event],
    ) -> Result<Vec<EventRecord>, DomainError> {
        let mut records = Vec::with_capacity(events.len());
        let mut sequence = current_sequence;

        for event in events {
            sequence = sequence.next();
            let record = EventRecord::builder()
                .aggregate_id(aggregate_id)
                .aggregate_type(A::aggregate_type())
                .event_type(event.event_type())
                .sequence(sequence)
                .payload(event)?
                .build();
            records.push(record);
        }

        Ok(records)
    }
}
