//! Aggregate roots for the User context.

use identity_core::aggregate::AggregateRoot;
use uuid::Uuid;

use super::value_objects::{AccountDetails, HashedPassword, UnverifiedEmail};

/// The aggregate root for a user account.
///
/// A `User` only comes into existence by deriving it from a `SignedUp`
/// event; it has no identity beyond the id and version it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    version: i64,
    primary_email: UnverifiedEmail,
    hashed_password: HashedPassword,
    account_details: AccountDetails,
}

impl User {
    /// Assembles a user from already-validated parts.
    #[must_use]
    pub fn from_properties(
        id: Uuid,
        version: i64,
        primary_email: UnverifiedEmail,
        hashed_password: HashedPassword,
        account_details: AccountDetails,
    ) -> Self {
        Self {
            id,
            version,
            primary_email,
            hashed_password,
            account_details,
        }
    }

    /// The primary email, pending verification.
    #[must_use]
    pub fn primary_email(&self) -> &UnverifiedEmail {
        &self.primary_email
    }

    /// The sealed password hash.
    #[must_use]
    pub fn hashed_password(&self) -> &HashedPassword {
        &self.hashed_password
    }

    /// Username and consent flag.
    #[must_use]
    pub fn account_details(&self) -> &AccountDetails {
        &self.account_details
    }
}

impl AggregateRoot for User {
    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }
}
