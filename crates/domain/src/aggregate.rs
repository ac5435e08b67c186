//! Core aggregate and domain event traits.

use common::AggregateId;
use event_log::Sequence;
use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// A domain event is an immutable fact about something that happened to
/// an aggregate, named in past tense. Events are the aggregate's only
/// externally observable output.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the event type name, used for log records and dispatch.
    fn event_type(&self) -> &'static str;
}

/// Trait for aggregates.
///
/// An aggregate is a consistency boundary: the only unit whose invariants
/// must hold after every committed operation. Its operations validate
/// preconditions and produce events; `apply` folds events back into
/// state.
pub trait Aggregate: Default + Send + Sync + Sized {
    /// The events this aggregate produces and consumes.
    type Event: DomainEvent;

    /// The error this aggregate's operations can produce.
    type Error: std::error::Error + Send + Sync;

    /// Returns the aggregate type name, used to label log records.
    fn aggregate_type() -> &'static str;

    /// Returns the aggregate's identity.
    ///
    /// Returns None for an aggregate that has not been created yet.
    fn id(&self) -> Option<AggregateId>;

    /// Returns the sequence of the last event folded into this aggregate.
    fn sequence(&self) -> Sequence;

    /// Sets the sequence. Called by the decide-and-apply protocol after
    /// loading or appending.
    fn set_sequence(&mut self, sequence: Sequence);

    /// Folds an event into the aggregate's state.
    ///
    /// Must be pure and deterministic: the same state and event always
    /// produce the same new state, with no side effects and no failure.
    /// An event is a fact that has already happened.
    fn apply(&mut self, event: Self::Event);

    /// Folds multiple events in order.
    fn apply_events(&mut self, events: impl IntoIterator<Item = Self::Event>) {
        for event in events {
            self.apply(event);
        }
    }
}
