//! Card parsing and rendering endpoints

use axum::{extract::State, Json};
use flashcard_core::{ParsedCard, RenderContext};

use crate::error::{ApiError, Result};
use crate::models::{parse_mode, ParseRequest, RenderRequest, RenderResponse};
use crate::services::render::render_cards;
use crate::AppState;

/// POST /api/parse
pub async fn parse(Json(request): Json<ParseRequest>) -> Json<ParsedCard> {
    Json(flashcard_core::parse(&request.source))
}

/// POST /api/render
pub async fn render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<RenderResponse>> {
    let mode = match request.reveal_mode.as_deref() {
        Some(value) => parse_mode(value)?,
        None => state.settings.read().await.reveal_mode,
    };
    let context = RenderContext {
        source_path: request.source_path,
    };
    let document = request.document;

    let response = tokio::task::spawn_blocking(move || render_cards(&document, &context, mode))
        .await
        .map_err(|e| ApiError::Internal(format!("render task failed: {}", e)))?;

    Ok(Json(response))
}
