//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                            -> list
/// POST   /                            -> create
/// GET    /{id}                        -> get_by_id
/// DELETE /{id}                        -> delete
/// POST   /{id}/generate               -> generate_all
/// POST   /{id}/generate/carousel      -> generate_carousel (step 1/3)
/// POST   /{id}/generate/animations    -> generate_animations (step 2/3)
/// POST   /{id}/generate/previews      -> generate_previews (step 3/3)
/// GET    /{id}/download               -> download (zip of PNGs)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id).delete(project::delete))
        .route("/{id}/generate", post(project::generate_all))
        .route("/{id}/generate/carousel", post(project::generate_carousel))
        .route(
            "/{id}/generate/animations",
            post(project::generate_animations),
        )
        .route("/{id}/generate/previews", post(project::generate_previews))
        .route("/{id}/download", get(project::download))
}
