//! Conversation CRUD HTTP handlers.
//!
//! Endpoints:
//! - GET    /api/v1/chat/conversations               - List conversations
//! - GET    /api/v1/chat/conversations/{id}/messages - Full history
//! - DELETE /api/v1/chat/conversations/{id}          - Delete a conversation

use std::time::Instant;

use axum::extract::{Path, State};
use serde::Serialize;
use uuid::Uuid;

use receptionist_types::chat::{ChatMessage, ConversationSummary};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Response payload for the history endpoint.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub conversation_id: String,
    pub count: usize,
    pub messages: Vec<ChatMessage>,
}

/// GET /api/v1/chat/conversations - List conversations, newest first.
pub async fn list_conversations(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<ConversationSummary>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let conversations = state.chat_service.list_conversations().await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(
        ApiResponse::success(conversations, request_id, elapsed)
            .with_link("self", "/api/v1/chat/conversations"),
    )
}

/// GET /api/v1/chat/conversations/{id}/messages - Full ordered history.
pub async fn get_history(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<ApiResponse<HistoryResponse>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let messages = state.chat_service.history(&conversation_id).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    let self_link = format!("/api/v1/chat/conversations/{conversation_id}/messages");

    Ok(ApiResponse::success(
        HistoryResponse {
            count: messages.len(),
            conversation_id,
            messages,
        },
        request_id,
        elapsed,
    )
    .with_link("self", &self_link))
}

/// DELETE /api/v1/chat/conversations/{id} - Delete a conversation and all
/// its messages. Deleting an unknown conversation is a no-op success.
pub async fn delete_conversation(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let removed = state.chat_service.delete_conversation(&conversation_id).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        serde_json::json!({"deleted": removed, "conversation_id": conversation_id}),
        request_id,
        elapsed,
    ))
}
