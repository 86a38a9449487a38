use std::sync::Arc;

use clipforge_pipeline::ContentPipeline;
use clipforge_render::HtmlRenderer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Generation orchestrator (store + structuring service).
    pub pipeline: Arc<ContentPipeline>,
    /// Rendering engine behind its trait seam, used by the download
    /// endpoint.
    pub renderer: Arc<dyn HtmlRenderer>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
