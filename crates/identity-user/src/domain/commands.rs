//! Commands for the User context.

use std::fmt;

use identity_core::command::Command;
use identity_core::event::Metadata;
use uuid::Uuid;

/// Command to sign a new user up.
#[derive(Clone)]
pub struct SignUp {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Identifier of the user stream to create.
    pub user_id: Uuid,
    /// Raw email address.
    pub primary_email: String,
    /// Plaintext password. Never logged; dropped once hashed.
    pub password: String,
    /// Display name.
    pub username: String,
    /// Whether the terms of use were accepted.
    pub terms_of_use_accepted: bool,
    /// Tracing metadata to attach to the resulting event.
    pub metadata: Metadata,
}

impl fmt::Debug for SignUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUp")
            .field("correlation_id", &self.correlation_id)
            .field("user_id", &self.user_id)
            .field("primary_email", &self.primary_email)
            .field("password", &"<redacted>")
            .field("username", &self.username)
            .field("terms_of_use_accepted", &self.terms_of_use_accepted)
            .field("metadata", &self.metadata)
            .finish()
    }
}

impl Command for SignUp {
    fn command_type(&self) -> &'static str {
        "identity.user.sign_up"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
