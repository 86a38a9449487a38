//! HTTP implementation of [`Structurer`] using [`reqwest`].
//!
//! Each trait method maps to one POST endpoint on the structuring service.
//! Responses are parsed strictly: a 2xx with an unexpected body is a
//! [`AiError::Malformed`], never a silent default.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::structurer::{AiError, Structurer};
use crate::types::{
    PreviewHtmlRequest, ProjectMetadata, SceneHtmlRequest, SlideHtmlRequest,
    StructuredAnimationSet, StructuredCarousel, StructuredScript,
};

/// Default base URL of the structuring service.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:3002";

/// Envelope used by the HTML-generation endpoints.
#[derive(Debug, Deserialize)]
struct HtmlPayload {
    html: String,
}

/// HTTP client for the structuring service.
pub struct HttpStructurer {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStructurer {
    /// Create a client targeting the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from the `STRUCTURING_SERVICE_URL` environment
    /// variable, falling back to [`DEFAULT_SERVICE_URL`].
    pub fn from_env() -> Self {
        let base_url = std::env::var("STRUCTURING_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
        Self::new(base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling across services).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    // ---- private helpers ----

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AiError>
    where
        B: serde::Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(AiError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| AiError::Malformed(e.to_string()))
    }

    async fn post_for_html<B>(&self, path: &str, body: &B) -> Result<String, AiError>
    where
        B: serde::Serialize + Sync,
    {
        let payload: HtmlPayload = self.post_json(path, body).await?;
        Ok(payload.html)
    }
}

#[async_trait]
impl Structurer for HttpStructurer {
    async fn extract_project_metadata(&self, script: &str) -> Result<ProjectMetadata, AiError> {
        tracing::debug!("extracting project metadata");
        self.post_json(
            "/extract/metadata",
            &serde_json::json!({ "script": script }),
        )
        .await
    }

    async fn structure_carousel(
        &self,
        script: &str,
        platform: &str,
        canvas: &str,
        ratio: &str,
    ) -> Result<StructuredCarousel, AiError> {
        tracing::debug!(platform, canvas, ratio, "structuring carousel");
        self.post_json(
            "/structure/carousel",
            &serde_json::json!({
                "script": script,
                "platform": platform,
                "canvas": canvas,
                "ratio": ratio,
            }),
        )
        .await
    }

    async fn structure_animations(
        &self,
        script: &str,
    ) -> Result<StructuredAnimationSet, AiError> {
        tracing::debug!("structuring animations");
        self.post_json(
            "/structure/animations",
            &serde_json::json!({ "script": script }),
        )
        .await
    }

    async fn structure_script(&self, script: &str) -> Result<StructuredScript, AiError> {
        tracing::debug!("structuring script");
        self.post_json(
            "/structure/script",
            &serde_json::json!({ "script": script }),
        )
        .await
    }

    async fn generate_slide_html(&self, request: &SlideHtmlRequest) -> Result<String, AiError> {
        tracing::debug!(
            slide = request.slide_number,
            total = request.total_slides,
            "generating slide HTML"
        );
        self.post_for_html("/generate/slide-html", request).await
    }

    async fn generate_scene_html(&self, request: &SceneHtmlRequest) -> Result<String, AiError> {
        tracing::debug!(
            scene = request.scene_number,
            total = request.total_scenes,
            "generating scene HTML"
        );
        self.post_for_html("/generate/scene-html", request).await
    }

    async fn generate_preview_html(
        &self,
        request: &PreviewHtmlRequest,
    ) -> Result<String, AiError> {
        tracing::debug!(
            width = request.width,
            height = request.height,
            "generating preview HTML"
        );
        self.post_for_html("/generate/preview-html", request).await
    }
}
