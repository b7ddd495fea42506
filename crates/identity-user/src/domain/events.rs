//! Domain events for the User context.

use std::fmt;

use identity_core::aggregate::CreatesAggregate;
use identity_core::error::DomainError;
use identity_core::event::{DomainEvent, EventEnvelope};
use identity_core::password::{HashingFailed, PasswordHasher};
use identity_core::repository::StoredEvent;
use identity_core::verification::VerificationCodeGenerator;
use serde::{Deserialize, Serialize};

use super::aggregates::User;
use super::value_objects::{
    AccountDetails, Email, HashedPassword, UnverifiedEmail, VerificationCode,
};

/// Event type name for [`SignedUp`].
pub const SIGNED_UP_EVENT_TYPE: &str = "identity.user.signed_up";

/// bcrypt work factor used when sealing a sign-up.
pub const PASSWORD_HASH_COST: u32 = 10;

/// Serialized body of a [`SignedUp`] event, i.e. everything but the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SignedUpPayload {
    primary_email: String,
    primary_email_verification_code: String,
    hashed_password: String,
    username: String,
    terms_of_use_accepted: bool,
}

/// Emitted when a user signs up. Genesis event of the `User` stream.
///
/// Instances are sealed: the verification code and password hash are
/// produced once in [`SignedUp::new`] and never recomputed.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedUp {
    envelope: EventEnvelope,
    primary_email: String,
    primary_email_verification_code: String,
    hashed_password: String,
    username: String,
    terms_of_use_accepted: bool,
}

impl SignedUp {
    /// Seals a sign-up: generates the email verification code, then hashes
    /// `password` at [`PASSWORD_HASH_COST`].
    ///
    /// `password` is only borrowed for the hashing call. No input is
    /// validated here.
    ///
    /// # Errors
    ///
    /// Returns `HashingFailed` if the hasher cannot produce a hash. No event
    /// is produced in that case.
    pub fn new(
        envelope: EventEnvelope,
        primary_email: impl Into<String>,
        password: &str,
        username: impl Into<String>,
        terms_of_use_accepted: bool,
        codes: &dyn VerificationCodeGenerator,
        hasher: &dyn PasswordHasher,
    ) -> Result<Self, HashingFailed> {
        let primary_email_verification_code = codes.generate();
        let hashed_password = hasher.hash(password, PASSWORD_HASH_COST)?;

        Ok(Self {
            envelope,
            primary_email: primary_email.into(),
            primary_email_verification_code,
            hashed_password,
            username: username.into(),
            terms_of_use_accepted,
        })
    }

    /// Raw email supplied at sign-up.
    #[must_use]
    pub fn primary_email(&self) -> &str {
        &self.primary_email
    }

    /// Code generated to verify ownership of the primary email.
    #[must_use]
    pub fn primary_email_verification_code(&self) -> &str {
        &self.primary_email_verification_code
    }

    /// One-way hash of the password.
    #[must_use]
    pub fn hashed_password(&self) -> &str {
        &self.hashed_password
    }

    /// Raw display name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Consent flag.
    #[must_use]
    pub fn terms_of_use_accepted(&self) -> bool {
        self.terms_of_use_accepted
    }

    /// Derives the genesis state of the user this event created.
    ///
    /// Pure: repeated calls return equal users.
    #[must_use]
    pub fn create_user(&self) -> User {
        User::from_properties(
            self.envelope.aggregate_id(),
            self.envelope.aggregate_version(),
            UnverifiedEmail::from_email_and_verification_code(
                Email::from_email(self.primary_email.as_str()),
                VerificationCode::from_verification_code(
                    self.primary_email_verification_code.as_str(),
                ),
            ),
            HashedPassword::from_hash(self.hashed_password.as_str()),
            AccountDetails::from_details(self.username.as_str(), self.terms_of_use_accepted),
        )
    }
}

impl fmt::Debug for SignedUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedUp")
            .field("envelope", &self.envelope)
            .field("primary_email", &self.primary_email)
            .field("username", &self.username)
            .field("terms_of_use_accepted", &self.terms_of_use_accepted)
            .finish_non_exhaustive()
    }
}

impl DomainEvent for SignedUp {
    fn event_type(&self) -> &'static str {
        SIGNED_UP_EVENT_TYPE
    }

    fn to_payload(&self) -> serde_json::Value {
        let payload = SignedUpPayload {
            primary_email: self.primary_email.clone(),
            primary_email_verification_code: self.primary_email_verification_code.clone(),
            hashed_password: self.hashed_password.clone(),
            username: self.username.clone(),
            terms_of_use_accepted: self.terms_of_use_accepted,
        };
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(payload).expect("SignedUpPayload serialization is infallible")
    }

    fn envelope(&self) -> &EventEnvelope {
        &self.envelope
    }
}

impl CreatesAggregate for SignedUp {
    type Aggregate = User;

    fn create_aggregate(&self) -> User {
        self.create_user()
    }
}

/// Restores a sealed event from the log without re-running its side effects.
impl TryFrom<&StoredEvent> for SignedUp {
    type Error = DomainError;

    fn try_from(stored: &StoredEvent) -> Result<Self, Self::Error> {
        if stored.event_type != SIGNED_UP_EVENT_TYPE {
            return Err(DomainError::Infrastructure(format!(
                "expected {SIGNED_UP_EVENT_TYPE} event, found {}",
                stored.event_type
            )));
        }
        if stored.aggregate_version != 1 {
            return Err(DomainError::Infrastructure(format!(
                "{SIGNED_UP_EVENT_TYPE} must open its stream at version 1, found version {}",
                stored.aggregate_version
            )));
        }
        let payload: SignedUpPayload = serde_json::from_value(stored.payload.clone())
            .map_err(|e| DomainError::Infrastructure(format!("event deserialization failed: {e}")))?;

        Ok(Self {
            envelope: stored.envelope(),
            primary_email: payload.primary_email,
            primary_email_verification_code: payload.primary_email_verification_code,
            hashed_password: payload.hashed_password,
            username: payload.username,
            terms_of_use_accepted: payload.terms_of_use_accepted,
        })
    }
}
