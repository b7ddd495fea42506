//! Domain event abstractions.
//!
//! Every event carries an [`EventEnvelope`] by value. The envelope is the
//! single implementation of causal metadata shared by all event types; it
//! is built once and only read afterwards.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Free-form string metadata attached to an event for auditing and tracing.
///
/// Keys are kept in lexicographic order. Domain logic never reads these
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    /// Creates an empty metadata map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this map with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Causal metadata carried by every domain event.
///
/// Callers supply every field; nothing is validated here. In particular the
/// caller is responsible for handing in a well-formed, non-decreasing
/// `aggregate_version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    event_id: Uuid,
    aggregate_id: Uuid,
    aggregate_version: i64,
    causation_id: Uuid,
    correlation_id: Uuid,
    recorded_on: DateTime<Utc>,
    metadata: Metadata,
}

impl EventEnvelope {
    /// Creates an envelope from its seven causal fields.
    #[must_use]
    pub fn new(
        event_id: Uuid,
        aggregate_id: Uuid,
        aggregate_version: i64,
        causation_id: Uuid,
        correlation_id: Uuid,
        recorded_on: DateTime<Utc>,
        metadata: Metadata,
    ) -> Self {
        Self {
            event_id,
            aggregate_id,
            aggregate_version,
            causation_id,
            correlation_id,
            recorded_on,
            metadata,
        }
    }

    /// Unique event identifier.
    #[must_use]
    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    /// Aggregate this event belongs to.
    #[must_use]
    pub fn aggregate_id(&self) -> Uuid {
        self.aggregate_id
    }

    /// Position of the event within its aggregate stream (1 = genesis).
    #[must_use]
    pub fn aggregate_version(&self) -> i64 {
        self.aggregate_version
    }

    /// The event or command that directly caused this event.
    #[must_use]
    pub fn causation_id(&self) -> Uuid {
        self.causation_id
    }

    /// Identifier shared by everything in one business transaction.
    #[must_use]
    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// When the event was recorded.
    #[must_use]
    pub fn recorded_on(&self) -> DateTime<Utc> {
        self.recorded_on
    }

    /// Free-form tracing metadata.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Trait that all domain events implement.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Returns the event type name (used for serialization routing).
    fn event_type(&self) -> &'static str;

    /// Serializes the event payload (everything except the envelope) to JSON.
    fn to_payload(&self) -> serde_json::Value;

    /// Returns the causal metadata for this event.
    fn envelope(&self) -> &EventEnvelope;
}
