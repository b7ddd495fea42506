//! Test password hashers — cheap `PasswordHasher` implementations for tests.

use identity_core::password::{HashingFailed, PasswordHasher};

use crate::call_log::CallLog;

/// A reversible "hasher" that encodes the cost next to the plaintext as
/// `plain${cost}${plaintext}`. Lets tests skip bcrypt's CPU cost while still
/// observing which cost was requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPasswordHasher;

impl PasswordHasher for PlainPasswordHasher {
    fn hash(&self, plaintext: &str, cost: u32) -> Result<String, HashingFailed> {
        Ok(format!("plain${cost}${plaintext}"))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let mut parts = hash.splitn(3, '$');
        matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some("plain"), Some(_), Some(stored)) if stored == plaintext
        )
    }
}

/// A hasher whose backend is always unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingPasswordHasher;

impl PasswordHasher for FailingPasswordHasher {
    fn hash(&self, _plaintext: &str, _cost: u32) -> Result<String, HashingFailed> {
        Err(HashingFailed::new("hashing backend unavailable"))
    }

    fn verify(&self, _plaintext: &str, _hash: &str) -> bool {
        false
    }
}

/// A hasher that records each `hash` call as `"hash"` in a [`CallLog`],
/// then either behaves like [`PlainPasswordHasher`] or fails.
#[derive(Debug, Clone)]
pub struct RecordingPasswordHasher {
    log: CallLog,
    fail: bool,
}

impl RecordingPasswordHasher {
    /// A recording hasher that succeeds.
    #[must_use]
    pub fn succeeding(log: CallLog) -> Self {
        Self { log, fail: false }
    }

    /// A recording hasher whose backend is unavailable.
    #[must_use]
    pub fn failing(log: CallLog) -> Self {
        Self { log, fail: true }
    }
}

impl PasswordHasher for RecordingPasswordHasher {
    fn hash(&self, plaintext: &str, cost: u32) -> Result<String, HashingFailed> {
        self.log.record("hash");
        if self.fail {
            FailingPasswordHasher.hash(plaintext, cost)
        } else {
            PlainPasswordHasher.hash(plaintext, cost)
        }
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        !self.fail && PlainPasswordHasher.verify(plaintext, hash)
    }
}
