//! Command handlers for the User context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: check the stream, seal the event, persist it.

use std::sync::Arc;

use identity_core::aggregate::CreatesAggregate;
use identity_core::clock::Clock;
use identity_core::command::Command;
use identity_core::error::DomainError;
use identity_core::event::EventEnvelope;
use identity_core::password::PasswordHasher;
use identity_core::repository::{EventRepository, StoredEvent};
use identity_core::verification::VerificationCodeGenerator;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::aggregates::User;
use crate::domain::commands::SignUp;
use crate::domain::events::SignedUp;

/// Reconstitutes a `User` from stored events.
///
/// The genesis `SignedUp` event is restored from its payload and derived
/// into the aggregate; nothing is hashed or generated again.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if the stream is empty.
/// Returns `DomainError::Infrastructure` if the stream does not start with a
/// `SignedUp` event at version 1 for `user_id`, contains an event type this context does not know, or
/// deserialization fails.
pub(crate) fn reconstitute(
    user_id: Uuid,
    existing_events: &[StoredEvent],
) -> Result<User, DomainError> {
    let Some((genesis, rest)) = existing_events.split_first() else {
        return Err(DomainError::AggregateNotFound(user_id));
    };

    if genesis.aggregate_id != user_id {
        return Err(DomainError::Infrastructure(format!(
            "stream {user_id} holds event {} of aggregate {}",
            genesis.event_id, genesis.aggregate_id
        )));
    }

    if let Some(unknown) = rest.first() {
        return Err(DomainError::Infrastructure(format!(
            "unknown event type {} in user stream {user_id}",
            unknown.event_type
        )));
    }

    let signed_up = SignedUp::try_from(genesis)?;
    Ok(signed_up.create_aggregate())
}

fn validate_sign_up(command: &SignUp) -> Result<(), DomainError> {
    if command.primary_email.trim().is_empty() {
        return Err(DomainError::Validation(
            "primary email must not be empty".into(),
        ));
    }
    if command.password.is_empty() {
        return Err(DomainError::Validation("password must not be empty".into()));
    }
    if command.username.trim().is_empty() {
        return Err(DomainError::Validation("username must not be empty".into()));
    }
    Ok(())
}

/// Handles the `SignUp` command: checks that the user stream is empty,
/// seals a `SignedUp` event at version 1 and persists it.
///
/// Hashing runs on the blocking thread pool.
///
/// # Errors
///
/// Returns `DomainError::Validation` for blank inputs,
/// `DomainError::AggregateAlreadyExists` if the stream already has events,
/// `DomainError::HashingFailed` if the password could not be hashed, and
/// repository errors as-is.
#[instrument(
    skip_all,
    fields(
        command_type = command.command_type(),
        user_id = %command.user_id,
        correlation_id = %command.correlation_id
    )
)]
pub async fn handle_sign_up(
    command: &SignUp,
    clock: &dyn Clock,
    codes: Arc<dyn VerificationCodeGenerator>,
    hasher: Arc<dyn PasswordHasher>,
    repo: &dyn EventRepository,
) -> Result<Vec<StoredEvent>, DomainError> {
    validate_sign_up(command)?;

    let user_id = command.user_id;
    let existing_events = repo.load_events(user_id).await?;
    if !existing_events.is_empty() {
        return Err(DomainError::AggregateAlreadyExists(user_id));
    }

    // TODO: event_id uses Uuid::new_v4() directly; inject an id source once
    // handlers need reproducible event ids.
    let envelope = EventEnvelope::new(
        Uuid::new_v4(),
        user_id,
        1,
        command.correlation_id,
        command.correlation_id,
        clock.now(),
        command.metadata.clone(),
    );
    let primary_email = command.primary_email.clone();
    let password = command.password.clone();
    let username = command.username.clone();
    let terms_of_use_accepted = command.terms_of_use_accepted;

    let sealed = tokio::task::spawn_blocking(move || {
        SignedUp::new(
            envelope,
            primary_email,
            &password,
            username,
            terms_of_use_accepted,
            codes.as_ref(),
            hasher.as_ref(),
        )
    })
    .await
    .map_err(|e| DomainError::Infrastructure(format!("sign-up task failed: {e}")))?;

    let event = sealed.map_err(|e| {
        warn!(error = %e, "could not seal signed_up event");
        DomainError::from(e)
    })?;

    let stored_events = vec![StoredEvent::from_event(&event)];
    repo.append_events(user_id, 0, &stored_events).await?;

    info!(event_id = %stored_events[0].event_id, "user signed up");

    Ok(stored_events)
}
