//! Settings endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{parse_mode, SettingsResponse, UpdateSettingsRequest};
use crate::AppState;

/// GET /api/settings
pub async fn get(State(state): State<AppState>) -> Json<SettingsResponse> {
    Json(*state.settings.read().await)
}

/// PUT /api/settings
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>> {
    let mut current = state.settings.write().await;
    let mut updated = *current;

    if let Some(reveal_mode) = request.reveal_mode.as_deref() {
        updated.reveal_mode = parse_mode(reveal_mode)?;
    }

    state.store.save(&updated).await?;
    *current = updated;
    tracing::info!(reveal_mode = %updated.reveal_mode, "settings saved");

    Ok(Json(updated))
}
