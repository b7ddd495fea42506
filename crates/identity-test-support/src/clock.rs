//! Test clock — deterministic `Clock` implementation for tests.

use chrono::{DateTime, Utc};
use identity_core::clock::Clock;

/// A clock pinned to one instant, for deterministic `recorded_on` values.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
