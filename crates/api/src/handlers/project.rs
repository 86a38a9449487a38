//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use clipforge_core::model::ProjectRecord;
use clipforge_core::types::EntityId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body for `POST /api/v1/projects`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// The raw script content to create a project from.
    #[validate(length(min = 1, message = "script must not be empty"))]
    pub script: String,
    /// Optional owning user.
    pub user_id: Option<String>,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ProjectRecord>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let record = state
        .pipeline
        .create_project(&input.script, input.user_id)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectRecord>>> {
    let records = state.pipeline.list_projects().await?;
    Ok(Json(records))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<ProjectRecord>> {
    let record = state.pipeline.get_project(id).await?;
    Ok(Json(record))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    state.pipeline.delete_project(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/projects/{id}/generate
pub async fn generate_all(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<ProjectRecord>> {
    let record = state.pipeline.generate_all(id).await?;
    Ok(Json(record))
}

/// POST /api/v1/projects/{id}/generate/carousel
pub async fn generate_carousel(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<ProjectRecord>> {
    let record = state.pipeline.generate_carousel(id).await?;
    Ok(Json(record))
}

/// POST /api/v1/projects/{id}/generate/animations
pub async fn generate_animations(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<ProjectRecord>> {
    let record = state.pipeline.generate_animations(id).await?;
    Ok(Json(record))
}

/// POST /api/v1/projects/{id}/generate/previews
pub async fn generate_previews(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<ProjectRecord>> {
    let record = state.pipeline.generate_previews(id).await?;
    Ok(Json(record))
}

/// GET /api/v1/projects/{id}/download
///
/// Renders every generated HTML fragment to PNG and streams the archive.
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Response> {
    let (file_name, bytes) = state
        .pipeline
        .export_archive(id, state.renderer.as_ref())
        .await?;

    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}
