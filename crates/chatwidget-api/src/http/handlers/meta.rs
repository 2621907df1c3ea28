//! Liveness and discovery endpoints.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET / - service name, version and the routes it serves.
pub async fn index(State(state): State<AppState>) -> Json<Value> {
    let restaurant = state
        .chat_service
        .profile()
        .name
        .as_deref()
        .unwrap_or("Restaurant");

    Json(json!({
        "name": format!("{restaurant} Chat API"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["GET /health", "POST /chat"],
    }))
}
