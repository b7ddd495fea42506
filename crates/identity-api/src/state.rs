//! Shared application state.

use std::sync::Arc;

use identity_core::clock::{Clock, SystemClock};
use identity_core::password::{BcryptPasswordHasher, PasswordHasher};
use identity_core::repository::EventRepository;
use identity_core::verification::{RandomVerificationCodeGenerator, VerificationCodeGenerator};
use identity_event_store::in_memory_event_repository::InMemoryEventRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of `recorded_on` timestamps.
    pub clock: Arc<dyn Clock>,
    /// Email verification code generator.
    pub verification_codes: Arc<dyn VerificationCodeGenerator>,
    /// Password hashing backend.
    pub password_hasher: Arc<dyn PasswordHasher>,
    /// Event store.
    pub event_repository: Arc<dyn EventRepository>,
}

impl AppState {
    /// Create new application state from its collaborators.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        verification_codes: Arc<dyn VerificationCodeGenerator>,
        password_hasher: Arc<dyn PasswordHasher>,
        event_repository: Arc<dyn EventRepository>,
    ) -> Self {
        Self {
            clock,
            verification_codes,
            password_hasher,
            event_repository,
        }
    }

    /// State wired with the system clock, random codes, bcrypt and an
    /// in-memory event store.
    #[must_use]
    pub fn production() -> Self {
        Self::new(
            Arc::new(SystemClock),
            Arc::new(RandomVerificationCodeGenerator),
            Arc::new(BcryptPasswordHasher),
            Arc::new(InMemoryEventRepository::new()),
        )
    }
}
