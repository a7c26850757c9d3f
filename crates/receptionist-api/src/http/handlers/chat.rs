//! Chat endpoints: send a message and edit a historical message.
//!
//! Endpoints:
//! - POST /api/v1/chat                      - Send a message, get the AI reply
//! - POST /api/v1/chat/messages/{id}/edit   - Edit a user message and regenerate
//!
//! Both endpoints commit the user's input before the AI call. When the
//! responder fails, the envelope carries the persisted state in `data`
//! plus an `UPSTREAM_FAILURE` error, so the UI can show the message and
//! offer a retry.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use receptionist_types::chat::{ChatMessage, TurnReply};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// The user message to send.
    pub message: String,
    /// Existing conversation to continue; if absent, one is created.
    pub conversation_id: Option<String>,
}

/// Response payload for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub conversation_id: String,
    /// Id of the persisted user message.
    pub message_id: Uuid,
    /// The AI reply, absent when the responder failed.
    pub response: Option<String>,
    /// Id of the persisted bot message, absent when the responder failed.
    pub response_id: Option<Uuid>,
}

/// Request body for the edit endpoint.
#[derive(Debug, Deserialize)]
pub struct EditMessageRequest {
    /// Replacement text for the edited message.
    pub message: String,
    /// The conversation the message belongs to.
    pub conversation_id: String,
}

/// Response payload for the edit endpoint.
#[derive(Debug, Serialize)]
pub struct EditMessageResponse {
    pub conversation_id: String,
    /// The replacement user message as stored.
    pub edited: ChatMessage,
    /// The regenerated reply, absent when the responder failed.
    pub response: Option<String>,
    /// The full post-edit history.
    pub messages: Vec<ChatMessage>,
}

/// POST /api/v1/chat - Send a message and return the AI reply.
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<SendMessageRequest>,
) -> Result<ApiResponse<SendMessageResponse>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let context = state.shop_service.shop_context().await?;
    let turn = state
        .chat_service
        .send_message(body.conversation_id, &body.message, &context)
        .await?;

    let elapsed = start.elapsed().as_millis() as u64;
    let history_link = format!(
        "/api/v1/chat/conversations/{}/messages",
        turn.conversation_id
    );

    let resp = match turn.reply {
        TurnReply::Answered(reply) => ApiResponse::success(
            SendMessageResponse {
                conversation_id: turn.conversation_id,
                message_id: turn.user_message.id,
                response: Some(reply.text),
                response_id: Some(reply.id),
            },
            request_id,
            elapsed,
        ),
        TurnReply::Unanswered { error } => ApiResponse::success(
            SendMessageResponse {
                conversation_id: turn.conversation_id,
                message_id: turn.user_message.id,
                response: None,
                response_id: None,
            },
            request_id,
            elapsed,
        )
        .with_error("UPSTREAM_FAILURE", &error),
    };

    Ok(resp.with_link("history", &history_link))
}

/// POST /api/v1/chat/messages/{id}/edit - Edit a user message and
/// regenerate everything after it.
pub async fn edit_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    Json(body): Json<EditMessageRequest>,
) -> Result<ApiResponse<EditMessageResponse>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let message_id = message_id
        .parse::<Uuid>()
        .map_err(|_| AppError::Validation(format!("Invalid message id: {message_id}")))?;

    let context = state.shop_service.shop_context().await?;
    let outcome = state
        .chat_service
        .edit_message(&message_id, &body.conversation_id, &body.message, &context)
        .await?;

    let elapsed = start.elapsed().as_millis() as u64;
    let history_link = format!(
        "/api/v1/chat/conversations/{}/messages",
        outcome.conversation_id
    );

    let (response, upstream_error) = match outcome.reply {
        TurnReply::Answered(reply) => (Some(reply.text), None),
        TurnReply::Unanswered { error } => (None, Some(error)),
    };

    let mut resp = ApiResponse::success(
        EditMessageResponse {
            conversation_id: outcome.conversation_id,
            edited: outcome.edited,
            response,
            messages: outcome.messages,
        },
        request_id,
        elapsed,
    );
    if let Some(error) = upstream_error {
        resp = resp.with_error("UPSTREAM_FAILURE", &error);
    }

    Ok(resp.with_link("history", &history_link))
}
