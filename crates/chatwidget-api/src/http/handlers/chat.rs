//! POST /chat - answer one widget message.

use axum::Json;
use axum::extract::State;

use chatwidget_types::wire::{ChatRequest, ChatResponse};

use crate::http::error::AppError;
use crate::state::AppState;

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let response = state.chat_service.handle(&request).await?;
    tracing::info!(source = ?response.source, "chat reply sent");
    Ok(Json(response))
}
