//! Route definitions, grouped by resource.

pub mod content;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/content", content::router())
}
