use axum::{extract::State, Json};
use serde_json::json;

use crate::{error::ApiError, AppState};

/// GET /health - Verify the service can reach its database
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.database.health_check().await?;

    Ok(Json(json!({
        "status": "ok",
        "app": state.config.app.name.clone(),
    })))
}
