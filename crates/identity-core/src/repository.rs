//! Event repository abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::event::{DomainEvent, EventEnvelope, Metadata};

/// Stored representation of a domain event.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEvent {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Aggregate this event belongs to.
    pub aggregate_id: Uuid,
    /// Event type name for deserialization routing.
    pub event_type: String,
    /// Serialized event payload.
    pub payload: serde_json::Value,
    /// Position within the aggregate stream.
    pub aggregate_version: i64,
    /// Correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Causation ID linking to the causing event/command.
    pub causation_id: Uuid,
    /// When the event was recorded.
    pub recorded_on: DateTime<Utc>,
    /// Free-form tracing metadata.
    pub metadata: Metadata,
}

impl StoredEvent {
    /// Flattens a domain event into its stored form.
    #[must_use]
    pub fn from_event<E: DomainEvent + ?Sized>(event: &E) -> Self {
        let envelope = event.envelope();
        Self {
            event_id: envelope.event_id(),
            aggregate_id: envelope.aggregate_id(),
            event_type: event.event_type().to_owned(),
            payload: event.to_payload(),
            aggregate_version: envelope.aggregate_version(),
            correlation_id: envelope.correlation_id(),
            causation_id: envelope.causation_id(),
            recorded_on: envelope.recorded_on(),
            metadata: envelope.metadata().clone(),
        }
    }

    /// Rebuilds the envelope this event was stored with.
    #[must_use]
    pub fn envelope(&self) -> EventEnvelope {
        EventEnvelope::new(
            self.event_id,
            self.aggregate_id,
            self.aggregate_version,
            self.causation_id,
            self.correlation_id,
            self.recorded_on,
            self.metadata.clone(),
        )
    }
}

/// Repository trait for loading and appending domain events.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Load all events for a given aggregate, ordered by version.
    async fn load_events(&self, aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError>;

    /// Append new events to an aggregate stream with optimistic concurrency.
    /// `expected_version` is the last known version of the stream (0 when
    /// the stream is expected to be empty).
    async fn append_events(
        &self,
        aggregate_id: Uuid,
        expected_version: i64,
        events: &[StoredEvent],
    ) -> Result<(), DomainError>;
}
