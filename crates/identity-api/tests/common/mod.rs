//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use identity_core::clock::Clock;
use identity_core::password::PasswordHasher;
use identity_core::repository::EventRepository;
use identity_core::verification::VerificationCodeGenerator;
use identity_event_store::in_memory_event_repository::InMemoryEventRepository;
use identity_test_support::{FixedClock, PlainPasswordHasher, SequenceVerificationCodeGenerator};
use tower::ServiceExt;

use identity_api::routes;
use identity_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

fn sequenced_codes() -> Arc<dyn VerificationCodeGenerator> {
    Arc::new(SequenceVerificationCodeGenerator::new(
        (1..=16).map(|n| format!("CODE{n:04}")).collect(),
    ))
}

/// Build the full app router over a fresh in-memory store, with a fixed
/// clock, sequenced verification codes and the cheap test hasher.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(PlainPasswordHasher), Arc::new(InMemoryEventRepository::new()))
}

/// Build the full app router with a custom hasher and repository.
pub fn build_test_app_with(
    password_hasher: Arc<dyn PasswordHasher>,
    event_repository: Arc<dyn EventRepository>,
) -> Router {
    let app_state = AppState::new(
        fixed_clock(),
        sequenced_codes(),
        password_hasher,
        event_repository,
    );
    routes::app(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("user-agent", "identity-tests")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
