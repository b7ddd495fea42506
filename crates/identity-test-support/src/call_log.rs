//! Shared call log — records the order in which collaborators are invoked.

use std::sync::{Arc, Mutex};

/// An ordered log of collaborator calls, shared between test doubles.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call name.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn record(&self, call: &'static str) {
        self.0.lock().unwrap().push(call);
    }

    /// Returns a snapshot of the calls recorded so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}
