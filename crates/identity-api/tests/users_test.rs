//! Integration tests for the User bounded context.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use identity_core::password::{BcryptPasswordHasher, PasswordHasher};
use identity_core::repository::EventRepository;
use identity_event_store::in_memory_event_repository::InMemoryEventRepository;
use identity_test_support::FailingPasswordHasher;
use uuid::Uuid;

fn sign_up_body(email: &str, username: &str) -> serde_json::Value {
    serde_json::json!({
        "primary_email": email,
        "password": "Secr3t!",
        "username": username,
        "terms_of_use_accepted": true
    })
}

#[tokio::test]
async fn test_sign_up_round_trip() {
    let app = common::build_test_app();

    // POST /api/v1/users/sign-up
    let (status, json) = common::post_json(
        app.clone(),
        "/api/v1/users/sign-up",
        &sign_up_body("a@example.com", "alice"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["event_ids"].as_array().unwrap().len(), 1);
    let user_id: Uuid = json["user_id"].as_str().unwrap().parse().unwrap();

    // GET /api/v1/users/{user_id}: verify hydrated state
    let (status, json) = common::get_json(app, &format!("/api/v1/users/{user_id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user_id"], user_id.to_string());
    assert_eq!(json["primary_email"], "a@example.com");
    assert_eq!(json["primary_email_verified"], false);
    assert_eq!(json["username"], "alice");
    assert_eq!(json["terms_of_use_accepted"], true);
    assert_eq!(json["version"], 1);
    assert!(json.get("hashed_password").is_none());
}

#[tokio::test]
async fn test_sign_up_stores_bcrypt_hash_and_request_metadata() {
    let hasher = Arc::new(BcryptPasswordHasher);
    let repo = Arc::new(InMemoryEventRepository::new());
    let app = common::build_test_app_with(hasher.clone(), repo.clone());

    let (status, json) = common::post_json(
        app,
        "/api/v1/users/sign-up",
        &sign_up_body("a@example.com", "alice"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let user_id: Uuid = json["user_id"].as_str().unwrap().parse().unwrap();

    let events = repo.load_events(user_id).await.unwrap();
    assert_eq!(events.len(), 1);
    let stored = &events[0];
    let hash = stored.payload["hashed_password"].as_str().unwrap();
    assert_ne!(hash, "Secr3t!");
    assert!(hasher.verify("Secr3t!", hash));
    assert_eq!(stored.payload["primary_email_verification_code"], "CODE0001");
    assert_eq!(stored.metadata.get("user_agent"), Some("identity-tests"));
    assert_eq!(stored.metadata.get("channel"), Some("http"));
}

#[tokio::test]
async fn test_each_sign_up_gets_its_own_verification_code() {
    let repo = Arc::new(InMemoryEventRepository::new());
    let app = common::build_test_app_with(
        Arc::new(identity_test_support::PlainPasswordHasher),
        repo.clone(),
    );

    let mut codes = Vec::new();
    for (email, username) in [("a@example.com", "alice"), ("b@example.com", "bob")] {
        let (status, json) =
            common::post_json(app.clone(), "/api/v1/users/sign-up", &sign_up_body(email, username))
                .await;
        assert_eq!(status, StatusCode::OK);
        let user_id: Uuid = json["user_id"].as_str().unwrap().parse().unwrap();
        let events = repo.load_events(user_id).await.unwrap();
        codes.push(events[0].payload["primary_email_verification_code"].clone());
    }

    assert_eq!(codes, vec!["CODE0001", "CODE0002"]);
}

#[tokio::test]
async fn test_sign_up_with_blank_username_returns_400() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app,
        "/api/v1/users/sign-up",
        &sign_up_body("a@example.com", "   "),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_sign_up_with_failing_hasher_returns_500() {
    let app = common::build_test_app_with(
        Arc::new(FailingPasswordHasher),
        Arc::new(InMemoryEventRepository::new()),
    );

    let (status, json) = common::post_json(
        app,
        "/api/v1/users/sign-up",
        &sign_up_body("a@example.com", "alice"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "hashing_failed");
    assert!(!json["message"].as_str().unwrap().contains("Secr3t!"));
}

#[tokio::test]
async fn test_get_unknown_user_returns_404() {
    let app = common::build_test_app();

    let (status, json) =
        common::get_json(app, &format!("/api/v1/users/{}", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "aggregate_not_found");
}
