//! Aggregate root abstractions.

use uuid::Uuid;

use crate::event::DomainEvent;

/// Trait for aggregate roots hydrated from their event history.
pub trait AggregateRoot: Send + Sync {
    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the version of the last event folded into this state.
    fn version(&self) -> i64;
}

/// A genesis event: one whose existence brings an aggregate into being.
///
/// `create_aggregate` must be a pure function of the event's stored fields.
/// It is called on every replay, so it may not hash, generate or perform I/O.
pub trait CreatesAggregate: DomainEvent {
    /// The aggregate this event creates.
    type Aggregate: AggregateRoot;

    /// Derives the aggregate's initial state from this event.
    fn create_aggregate(&self) -> Self::Aggregate;
}
