use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/water", post(handlers::water))
        .route("/api/status", get(handlers::status))
        .route("/api/ping", get(handlers::ping))
        .with_state(state)
}
