//! Verification-code generation.
//!
//! In production, codes come from the thread-local CSPRNG. In tests a
//! fixed or sequenced implementation is injected.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of codes produced by [`RandomVerificationCodeGenerator`].
pub const VERIFICATION_CODE_LENGTH: usize = 32;

/// Source of fresh, unpredictable verification codes.
pub trait VerificationCodeGenerator: Send + Sync {
    /// Returns a new opaque code.
    fn generate(&self) -> String;
}

/// Generates alphanumeric codes of [`VERIFICATION_CODE_LENGTH`] characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomVerificationCodeGenerator;

impl VerificationCodeGenerator for RandomVerificationCodeGenerator {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(VERIFICATION_CODE_LENGTH)
            .map(char::from)
            .collect()
    }
}
