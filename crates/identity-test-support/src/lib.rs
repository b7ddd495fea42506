//! Shared test mocks and utilities for the Identity service.

mod call_log;
mod clock;
mod password;
mod repository;
mod verification;

pub use call_log::CallLog;
pub use clock::FixedClock;
pub use password::{FailingPasswordHasher, PlainPasswordHasher, RecordingPasswordHasher};
pub use repository::{
    AppendCall, EmptyEventRepository, FailingEventRepository, RecordingEventRepository,
};
pub use verification::{
    FixedVerificationCodeGenerator, RecordingVerificationCodeGenerator,
    SequenceVerificationCodeGenerator,
};
