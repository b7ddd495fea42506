//! Value objects assembled into the `User` aggregate.
//!
//! These are plain holders. Format checks belong to the command layer.

use std::fmt;

/// An email address as supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Wraps a raw email string.
    #[must_use]
    pub fn from_email(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// The raw email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A code mailed to the user to prove ownership of an address.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Wraps an opaque verification code.
    #[must_use]
    pub fn from_verification_code(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The opaque code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VerificationCode(<redacted>)")
    }
}

/// An email address whose ownership has not been proven yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnverifiedEmail {
    email: Email,
    verification_code: VerificationCode,
}

impl UnverifiedEmail {
    /// Pairs an address with the code that will verify it.
    #[must_use]
    pub fn from_email_and_verification_code(
        email: Email,
        verification_code: VerificationCode,
    ) -> Self {
        Self {
            email,
            verification_code,
        }
    }

    /// The unverified address.
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// The pending verification code.
    #[must_use]
    pub fn verification_code(&self) -> &VerificationCode {
        &self.verification_code
    }
}

/// A password that has already been through the one-way hash.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Wraps an existing hash. Never hashes.
    #[must_use]
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// The stored hash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword(<redacted>)")
    }
}

/// Public profile details chosen at sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDetails {
    username: String,
    terms_of_use_accepted: bool,
}

impl AccountDetails {
    /// Creates account details from a display name and the consent flag.
    #[must_use]
    pub fn from_details(username: impl Into<String>, terms_of_use_accepted: bool) -> Self {
        Self {
            username: username.into(),
            terms_of_use_accepted,
        }
    }

    /// Display name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Whether the user accepted the terms of use.
    #[must_use]
    pub fn terms_of_use_accepted(&self) -> bool {
        self.terms_of_use_accepted
    }
}
