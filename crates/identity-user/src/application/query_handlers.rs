//! Query handlers for the User context.
//!
//! This module contains query handlers that reconstitute aggregates
//! from stored events and return read-only view DTOs.

use identity_core::aggregate::AggregateRoot;
use identity_core::error::DomainError;
use identity_core::repository::EventRepository;
use serde::Serialize;
use uuid::Uuid;

use crate::application::command_handlers;

/// Read-only view of a user aggregate.
///
/// Never exposes the password hash or the verification code.
#[derive(Debug, Serialize)]
pub struct UserView {
    /// The user identifier.
    pub user_id: Uuid,
    /// Primary email address.
    pub primary_email: String,
    /// Whether the primary email has been verified.
    pub primary_email_verified: bool,
    /// Display name.
    pub username: String,
    /// Whether the terms of use were accepted.
    pub terms_of_use_accepted: bool,
    /// Current version.
    pub version: i64,
}

/// Retrieves a user by its aggregate ID.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if no events exist for the ID.
/// Returns `DomainError::Infrastructure` if event deserialization fails.
pub async fn get_user_by_id(
    user_id: Uuid,
    repo: &dyn EventRepository,
) -> Result<UserView, DomainError> {
    let stored_events = repo.load_events(user_id).await?;
    let user = command_handlers::reconstitute(user_id, &stored_events)?;
    Ok(UserView {
        user_id: user.aggregate_id(),
        primary_email: user.primary_email().email().as_str().to_owned(),
        primary_email_verified: false,
        username: user.account_details().username().to_owned(),
        terms_of_use_accepted: user.account_details().terms_of_use_accepted(),
        version: user.version(),
    })
}
