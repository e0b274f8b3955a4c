//! Chat API endpoint.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse};
use crate::AppState;

/// POST /api/chat - Forward a message to the assistant and return its reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<ChatResponse> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let response = state.assistant.reply(&request.message).await?;
    Ok(Json(ChatResponse { response }))
}
