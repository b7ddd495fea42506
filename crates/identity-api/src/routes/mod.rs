//! Route modules organized by bounded context.

pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Builds the full application router over `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/users", users::router())
        .with_state(state)
}
