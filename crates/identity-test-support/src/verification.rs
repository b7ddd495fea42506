//! Test code generators — deterministic `VerificationCodeGenerator`
//! implementations for tests.

use std::sync::Mutex;

use identity_core::verification::VerificationCodeGenerator;

use crate::call_log::CallLog;

/// Returns the same code on every call.
#[derive(Debug, Clone)]
pub struct FixedVerificationCodeGenerator(String);

impl FixedVerificationCodeGenerator {
    /// Create a generator that always yields `code`.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl VerificationCodeGenerator for FixedVerificationCodeGenerator {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

/// Returns codes from a predetermined sequence. Panics if the sequence is
/// exhausted.
#[derive(Debug)]
pub struct SequenceVerificationCodeGenerator {
    codes: Vec<String>,
    index: Mutex<usize>,
}

impl SequenceVerificationCodeGenerator {
    /// Create a new `SequenceVerificationCodeGenerator` with the given codes.
    #[must_use]
    pub fn new(codes: Vec<String>) -> Self {
        Self {
            codes,
            index: Mutex::new(0),
        }
    }
}

impl VerificationCodeGenerator for SequenceVerificationCodeGenerator {
    fn generate(&self) -> String {
        let mut index = self.index.lock().unwrap();
        let code = self.codes[*index].clone();
        *index += 1;
        code
    }
}

/// Returns a fixed code and records each call as `"generate"` in a
/// [`CallLog`].
#[derive(Debug, Clone)]
pub struct RecordingVerificationCodeGenerator {
    log: CallLog,
    code: String,
}

impl RecordingVerificationCodeGenerator {
    /// Create a generator that yields `code` and records into `log`.
    #[must_use]
    pub fn new(log: CallLog, code: impl Into<String>) -> Self {
        Self {
            log,
            code: code.into(),
        }
    }
}

impl VerificationCodeGenerator for RecordingVerificationCodeGenerator {
    fn generate(&self) -> String {
        self.log.record("generate");
        self.code.clone()
    }
}
