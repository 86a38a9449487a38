//! The [`Structurer`] trait: every AI call the pipeline makes.

use async_trait::async_trait;

use crate::types::{
    PreviewHtmlRequest, ProjectMetadata, SceneHtmlRequest, SlideHtmlRequest,
    StructuredAnimationSet, StructuredCarousel, StructuredScript,
};

/// Errors from the structuring service layer.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("structuring service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service answered 2xx but the body did not match the expected
    /// shape.
    #[error("malformed structuring response: {0}")]
    Malformed(String),
}

/// Typed access to the structuring service.
///
/// One method per AI invocation the pipeline performs; implementations must
/// be safe to share across concurrent tasks. The HTML-generation methods
/// are independent per sub-unit and are fanned out concurrently by the
/// generators.
#[async_trait]
pub trait Structurer: Send + Sync {
    /// Extract project metadata (name, title, hook, thumbnail seed) from a
    /// raw script.
    async fn extract_project_metadata(&self, script: &str) -> Result<ProjectMetadata, AiError>;

    /// Structure a carousel from a script with platform/canvas/ratio hints.
    async fn structure_carousel(
        &self,
        script: &str,
        platform: &str,
        canvas: &str,
        ratio: &str,
    ) -> Result<StructuredCarousel, AiError>;

    /// Structure an animation scene set from a script.
    async fn structure_animations(&self, script: &str)
        -> Result<StructuredAnimationSet, AiError>;

    /// Structure a complete short-video script from raw text.
    async fn structure_script(&self, script: &str) -> Result<StructuredScript, AiError>;

    /// Generate the HTML fragment for one carousel slide.
    async fn generate_slide_html(&self, request: &SlideHtmlRequest) -> Result<String, AiError>;

    /// Generate the HTML fragment for one animation scene.
    async fn generate_scene_html(&self, request: &SceneHtmlRequest) -> Result<String, AiError>;

    /// Generate the HTML document for one preview thumbnail.
    async fn generate_preview_html(
        &self,
        request: &PreviewHtmlRequest,
    ) -> Result<String, AiError>;
}
