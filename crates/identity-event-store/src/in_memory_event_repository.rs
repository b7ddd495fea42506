//! In-memory implementation of the `EventRepository` trait.
//!
//! Streams live for the lifetime of the process. Appends are checked with
//! the same optimistic-concurrency rule a durable store applies: the
//! caller's `expected_version` must equal the stream's current version.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use identity_core::error::DomainError;
use identity_core::repository::{EventRepository, StoredEvent};

/// Event repository backed by a process-local map of streams.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    streams: RwLock<HashMap<Uuid, Vec<StoredEvent>>>,
}

impl InMemoryEventRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn current_version(stream: &[StoredEvent]) -> i64 {
    stream.last().map_or(0, |e| e.aggregate_version)
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn load_events(&self, aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        let streams = self.streams.read().await;
        Ok(streams.get(&aggregate_id).cloned().unwrap_or_default())
    }

    async fn append_events(
        &self,
        aggregate_id: Uuid,
        expected_version: i64,
        events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        let mut streams = self.streams.write().await;

        let actual = streams
            .get(&aggregate_id)
            .map_or(0, |stream| current_version(stream));
        if actual != expected_version {
            return Err(DomainError::ConcurrencyConflict {
                aggregate_id,
                expected: expected_version,
                actual,
            });
        }

        let mut next = actual;
        for event in events {
            if event.aggregate_id != aggregate_id {
                return Err(DomainError::Infrastructure(format!(
                    "event {} belongs to aggregate {}, not {aggregate_id}",
                    event.event_id, event.aggregate_id
                )));
            }
            if event.aggregate_version != next + 1 {
                return Err(DomainError::ConcurrencyConflict {
                    aggregate_id,
                    expected: next + 1,
                    actual: event.aggregate_version,
                });
            }
            next = event.aggregate_version;
        }

        streams
            .entry(aggregate_id)
            .or_default()
            .extend_from_slice(events);
        debug!(%aggregate_id, version = next, appended = events.len(), "events appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use identity_core::event::Metadata;

    use super::*;

    fn stored_event(aggregate_id: Uuid, aggregate_version: i64) -> StoredEvent {
        StoredEvent {
            event_id: Uuid::new_v4(),
            aggregate_id,
            event_type: "TestEvent".to_string(),
            payload: serde_json::json!({}),
            aggregate_version,
            correlation_id: Uuid::new_v4(),
            causation_id: Uuid::new_v4(),
            recorded_on: Utc::now(),
            metadata: Metadata::new(),
        }
    }

    #[tokio::test]
    async fn test_rejected_append_does_not_create_stream() {
        // Arrange
        let repo = InMemoryEventRepository::new();
        let version_gap = Uuid::new_v4();
        let wrong_aggregate = Uuid::new_v4();
        let stale = Uuid::new_v4();

        // Act
        let gap = repo
            .append_events(version_gap, 0, &[stored_event(version_gap, 2)])
            .await;
        let mismatch = repo
            .append_events(wrong_aggregate, 0, &[stored_event(Uuid::new_v4(), 1)])
            .await;
        let conflict = repo
            .append_events(stale, 3, &[stored_event(stale, 4)])
            .await;

        // Assert
        assert!(gap.is_err());
        assert!(mismatch.is_err());
        assert!(conflict.is_err());
        assert!(repo.streams.read().await.is_empty());
    }
}
