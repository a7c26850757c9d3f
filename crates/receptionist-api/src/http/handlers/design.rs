//! Cake design HTTP handlers.
//!
//! Endpoints:
//! - GET /api/v1/cake-designs - The full catalog
//! - PUT /api/v1/cake-designs - Replace the full catalog

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use receptionist_types::shop::CakeDesign;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Payload for both directions of the cake designs endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct DesignsPayload {
    pub designs: Vec<CakeDesign>,
}

/// GET /api/v1/cake-designs - The full catalog.
pub async fn get_designs(
    State(state): State<AppState>,
) -> Result<ApiResponse<DesignsPayload>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let designs = state.shop_service.designs().await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(
        ApiResponse::success(DesignsPayload { designs }, request_id, elapsed)
            .with_link("self", "/api/v1/cake-designs"),
    )
}

/// PUT /api/v1/cake-designs - Replace the full catalog.
pub async fn update_designs(
    State(state): State<AppState>,
    Json(body): Json<DesignsPayload>,
) -> Result<ApiResponse<serde_json::Value>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    state.shop_service.update_designs(&body.designs).await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(ApiResponse::success(
        serde_json::json!({"updated": body.designs.len()}),
        request_id,
        elapsed,
    ))
}
