//! Settings HTTP handlers: system prompt and conversion instructions.
//!
//! Endpoints:
//! - GET /api/v1/system-prompt            - Current system prompt
//! - PUT /api/v1/system-prompt            - Overwrite the system prompt
//! - GET /api/v1/conversion-instructions  - Current conversion instructions
//! - PUT /api/v1/conversion-instructions  - Overwrite conversion instructions

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use receptionist_types::shop::{ConversionInstructions, SystemPrompt};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/system-prompt - Current system prompt.
pub async fn get_system_prompt(
    State(state): State<AppState>,
) -> Result<ApiResponse<SystemPrompt>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let prompt = state.shop_service.system_prompt().await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(prompt, request_id, elapsed)
        .with_link("self", "/api/v1/system-prompt"))
}

/// PUT /api/v1/system-prompt - Overwrite the system prompt.
pub async fn update_system_prompt(
    State(state): State<AppState>,
    Json(body): Json<SystemPrompt>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    if body.prompt.trim().is_empty() {
        return Err(AppError::Validation(
            "system prompt must not be empty".to_string(),
        ));
    }
    state.shop_service.update_system_prompt(&body).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        serde_json::json!({"updated": true}),
        request_id,
        elapsed,
    ))
}

/// GET /api/v1/conversion-instructions - Current conversion instructions.
pub async fn get_conversion_instructions(
    State(state): State<AppState>,
) -> Result<ApiResponse<ConversionInstructions>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let instructions = state.shop_service.conversion_instructions().await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(instructions, request_id, elapsed)
        .with_link("self", "/api/v1/conversion-instructions"))
}

/// PUT /api/v1/conversion-instructions - Overwrite conversion instructions.
pub async fn update_conversion_instructions(
    State(state): State<AppState>,
    Json(body): Json<ConversionInstructions>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    state
        .shop_service
        .update_conversion_instructions(&body)
        .await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        serde_json::json!({"updated": true}),
        request_id,
        elapsed,
    ))
}
