//! Test repositories — mock `EventRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use identity_core::error::DomainError;
use identity_core::repository::{EventRepository, StoredEvent};
use uuid::Uuid;

/// One recorded `append_events` call: aggregate, expected version, events.
pub type AppendCall = (Uuid, i64, Vec<StoredEvent>);

/// An event repository that serves a fixed stream from `load_events` and
/// records every `append_events` call without applying it.
#[derive(Debug, Default)]
pub struct RecordingEventRepository {
    existing: Vec<StoredEvent>,
    appended: Mutex<Vec<AppendCall>>,
}

impl RecordingEventRepository {
    /// Create a recording repository whose streams are all empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording repository that returns `existing` for every
    /// aggregate.
    #[must_use]
    pub fn with_events(existing: Vec<StoredEvent>) -> Self {
        Self {
            existing,
            appended: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all append calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn appended_events(&self) -> Vec<AppendCall> {
        self.appended.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventRepository for RecordingEventRepository {
    async fn load_events(&self, _aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        Ok(self.existing.clone())
    }

    async fn append_events(
        &self,
        aggregate_id: Uuid,
        expected_version: i64,
        events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        self.appended
            .lock()
            .unwrap()
            .push((aggregate_id, expected_version, events.to_vec()));
        Ok(())
    }
}

/// An event repository with no streams that silently accepts appends.
/// Useful for "user not found" scenarios.
#[derive(Debug)]
pub struct EmptyEventRepository;

#[async_trait]
impl EventRepository for EmptyEventRepository {
    async fn load_events(&self, _aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        Ok(vec![])
    }

    async fn append_events(
        &self,
        _aggregate_id: Uuid,
        _expected_version: i64,
        _events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        Ok(())
    }
}

/// An event repository whose store is unreachable.
#[derive(Debug)]
pub struct FailingEventRepository;

#[async_trait]
impl EventRepository for FailingEventRepository {
    async fn load_events(&self, _aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn append_events(
        &self,
        _aggregate_id: Uuid,
        _expected_version: i64,
        _events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
