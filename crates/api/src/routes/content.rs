//! Route definitions for the `/content` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Routes mounted at `/content`.
pub fn router() -> Router<AppState> {
    Router::new().route("/script/generate", post(content::generate_script))
}
