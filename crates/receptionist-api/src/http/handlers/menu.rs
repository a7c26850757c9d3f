//! Shop menu HTTP handlers.
//!
//! Endpoints:
//! - GET /api/v1/menu - The full menu
//! - PUT /api/v1/menu - Replace the full menu

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use receptionist_types::shop::MenuItem;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Payload for both directions of the menu endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct MenuPayload {
    pub items: Vec<MenuItem>,
}

/// GET /api/v1/menu - The full menu.
pub async fn get_menu(
    State(state): State<AppState>,
) -> Result<ApiResponse<MenuPayload>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let items = state.shop_service.menu().await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(MenuPayload { items }, request_id, elapsed)
        .with_link("self", "/api/v1/menu"))
}

/// PUT /api/v1/menu - Replace the full menu.
pub async fn update_menu(
    State(state): State<AppState>,
    Json(body): Json<MenuPayload>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    state.shop_service.update_menu(&body.items).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        serde_json::json!({"updated": body.items.len()}),
        request_id,
        elapsed,
    ))
}
