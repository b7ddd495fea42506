//! Password hashing abstraction.
//!
//! Event construction hashes the plaintext exactly once through a
//! [`PasswordHasher`]. Implementations report failure with [`HashingFailed`]
//! instead of returning an empty hash.

use thiserror::Error;

/// The hashing primitive could not produce a hash for the given input.
///
/// The reason comes from the hashing backend and never contains the
/// plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not hash password: {reason}")]
pub struct HashingFailed {
    reason: String,
}

impl HashingFailed {
    /// Creates a new error with the backend's reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The backend's reason for the failure.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Longest password, in bytes, that bcrypt hashes without truncation.
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

/// One-way, salted password hashing.
pub trait PasswordHasher: Send + Sync {
    /// Hashes `plaintext` with the given work factor.
    ///
    /// # Errors
    ///
    /// Returns `HashingFailed` if the backend rejects the input or the cost.
    /// Inputs the backend would silently truncate are rejected, not
    /// shortened.
    fn hash(&self, plaintext: &str, cost: u32) -> Result<String, HashingFailed>;

    /// Returns `true` if `plaintext` matches `hash`. Malformed hashes never
    /// match.
    fn verify(&self, plaintext: &str, hash: &str) -> bool;
}

/// Production hasher backed by bcrypt.
///
/// bcrypt only reads the first [`BCRYPT_MAX_PASSWORD_BYTES`] bytes of its
/// input; longer passwords fail with `HashingFailed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptPasswordHasher;

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plaintext: &str, cost: u32) -> Result<String, HashingFailed> {
        bcrypt::non_truncating_hash(plaintext, cost).map_err(|e| {
            tracing::warn!(cost, error = %e, "bcrypt hashing failed");
            HashingFailed::new(e.to_string())
        })
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        bcrypt::verify(plaintext, hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcrypt_hash_verifies_against_plaintext() {
        // Arrange
        let hasher = BcryptPasswordHasher;

        // Act
        let hash = hasher.hash("correct horse", 4).unwrap();

        // Assert
        assert_ne!(hash, "correct horse");
        assert!(hasher.verify("correct horse", &hash));
        assert!(!hasher.verify("battery staple", &hash));
    }

    #[test]
    fn test_bcrypt_hash_is_salted() {
        let hasher = BcryptPasswordHasher;

        let first = hasher.hash("same", 4).unwrap();
        let second = hasher.hash("same", 4).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_bcrypt_rejects_cost_below_minimum() {
        // Arrange
        let hasher = BcryptPasswordHasher;

        // Act
        let result = hasher.hash("whatever", 3);

        // Assert
        let err = result.unwrap_err();
        assert!(!err.reason().is_empty());
        assert!(!err.to_string().contains("whatever"));
    }

    #[test]
    fn test_bcrypt_rejects_password_longer_than_limit() {
        // Arrange
        let hasher = BcryptPasswordHasher;
        let at_limit = "x".repeat(BCRYPT_MAX_PASSWORD_BYTES);
        let too_long = format!("{at_limit}AAAA");

        // Act
        let accepted = hasher.hash(&at_limit, 4);
        let rejected = hasher.hash(&too_long, 4);

        // Assert
        assert!(hasher.verify(&at_limit, &accepted.unwrap()));
        let err = rejected.unwrap_err();
        assert!(!err.to_string().contains("AAAA"));
    }

    #[test]
    fn test_verify_returns_false_for_malformed_hash() {
        assert!(!BcryptPasswordHasher.verify("secret", "not-a-bcrypt-hash"));
    }
}
