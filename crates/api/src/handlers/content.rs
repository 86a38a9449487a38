//! Handlers for the `/content` resource: generation without persistence.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use clipforge_ai::types::StructuredScript;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body for `POST /api/v1/content/script/generate`.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateScriptRequest {
    #[validate(length(min = 1, message = "script must not be empty"))]
    pub script: String,
}

/// POST /api/v1/content/script/generate
pub async fn generate_script(
    State(state): State<AppState>,
    Json(input): Json<GenerateScriptRequest>,
) -> AppResult<Json<StructuredScript>> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let script = state.pipeline.generate_script(&input.script).await?;
    Ok(Json(script))
}
