//! Routes for the User bounded context.

use std::fmt;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::http::header::USER_AGENT;
use axum::routing::{get, post};
use axum::{Json, Router};
use identity_core::event::Metadata;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use identity_user::application::query_handlers::UserView;
use identity_user::application::{command_handlers, query_handlers};
use identity_user::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /sign-up.
#[derive(Deserialize)]
pub struct SignUpRequest {
    /// Email address to register.
    pub primary_email: String,
    /// Plaintext password.
    pub password: String,
    /// Display name.
    pub username: String,
    /// Whether the terms of use were accepted.
    pub terms_of_use_accepted: bool,
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("primary_email", &self.primary_email)
            .field("password", &"<redacted>")
            .field("username", &self.username)
            .field("terms_of_use_accepted", &self.terms_of_use_accepted)
            .finish()
    }
}

/// Response body returned after a successful sign-up.
#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    /// The newly created user.
    pub user_id: Uuid,
    /// IDs of the domain events produced and persisted.
    pub event_ids: Vec<Uuid>,
}

fn request_metadata(headers: &HeaderMap) -> Metadata {
    let mut metadata = Metadata::new().with("channel", "http");
    if let Some(agent) = headers.get(USER_AGENT).and_then(|v| v.to_str().ok()) {
        metadata = metadata.with("user_agent", agent);
    }
    metadata
}

/// POST /sign-up
#[instrument(skip_all)]
async fn sign_up(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SignUpRequest>,
) -> Result<Json<SignUpResponse>, ApiError> {
    let command = commands::SignUp {
        correlation_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        primary_email: request.primary_email,
        password: request.password,
        username: request.username,
        terms_of_use_accepted: request.terms_of_use_accepted,
        metadata: request_metadata(&headers),
    };

    info!(
        correlation_id = %command.correlation_id,
        user_id = %command.user_id,
        "handling sign_up command"
    );

    let stored_events = command_handlers::handle_sign_up(
        &command,
        state.clock.as_ref(),
        state.verification_codes.clone(),
        state.password_hasher.clone(),
        &*state.event_repository,
    )
    .await?;

    let event_ids = stored_events.iter().map(|e| e.event_id).collect();

    Ok(Json(SignUpResponse {
        user_id: command.user_id,
        event_ids,
    }))
}

/// GET /{user_id}
#[instrument(skip(state))]
async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserView>, ApiError> {
    let view = query_handlers::get_user_by_id(user_id, &*state.event_repository).await?;
    Ok(Json(view))
}

/// Returns the router for the user context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/{user_id}", get(get_user))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::http::HeaderValue;

    #[test]
    fn test_sign_up_request_debug_redacts_password() {
        let request = SignUpRequest {
            primary_email: "a@example.com".to_owned(),
            password: "Secr3t!".to_owned(),
            username: "alice".to_owned(),
            terms_of_use_accepted: true,
        };

        let debug = format!("{request:?}");

        assert!(!debug.contains("Secr3t!"));
        assert!(debug.contains("alice"));
    }

    #[test]
    fn test_request_metadata_captures_user_agent() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("curl/8.0"));

        let metadata = request_metadata(&headers);

        assert_eq!(metadata.get("channel"), Some("http"));
        assert_eq!(metadata.get("user_agent"), Some("curl/8.0"));
    }

    #[test]
    fn test_request_metadata_without_headers_only_has_channel() {
        let metadata = request_metadata(&HeaderMap::new());

        assert_eq!(metadata.len(), 1);
    }
}
