//! Shared helpers for the API integration tests.
//!
//! Builds the full application router over the in-memory store, a static
//! structuring-service double, and a stub renderer, so tests exercise the
//! same middleware stack production uses.
#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use clipforge_ai::types::{
    PreviewHtmlRequest, ProjectMetadata, SceneHtmlRequest, ScriptSection, SlideHtmlRequest,
    StructuredAnimationSet, StructuredCarousel, StructuredScene, StructuredScript,
    StructuredSlide,
};
use clipforge_ai::{AiError, Structurer};
use clipforge_api::config::ServerConfig;
use clipforge_api::router::build_app;
use clipforge_api::state::AppState;
use clipforge_pipeline::ContentPipeline;
use clipforge_render::{HtmlRenderer, RenderError};
use clipforge_store::MemoryStore;

pub const SAMPLE_SCRIPT: &str = "Did you know Netflix uses AI for its covers?";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Full application router with the default test doubles.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(StaticStructurer), Arc::new(StubRenderer))
}

/// Full application router with explicit doubles.
pub fn build_test_app_with(
    structurer: Arc<dyn Structurer>,
    renderer: Arc<dyn HtmlRenderer>,
) -> Router {
    let store = Arc::new(MemoryStore::new());
    let pipeline = Arc::new(ContentPipeline::new(store, structurer));
    let state = AppState {
        pipeline,
        renderer,
        config: Arc::new(test_config()),
    };
    build_app(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_empty(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a project through the API and return its id.
pub async fn create_project(app: &Router) -> String {
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({ "script": SAMPLE_SCRIPT }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Structuring-service double
// ---------------------------------------------------------------------------

/// Deterministic structuring service: two slides, two scenes, one section.
pub struct StaticStructurer;

#[async_trait]
impl Structurer for StaticStructurer {
    async fn extract_project_metadata(&self, _script: &str) -> Result<ProjectMetadata, AiError> {
        Ok(ProjectMetadata {
            name: "Netflix AI".to_string(),
            title: "How Netflix personalizes covers with AI".to_string(),
            folder_name: "netflix_ai".to_string(),
            hook: "Did you know Netflix uses AI for its covers?".to_string(),
            thumbnail_seed: "netflix".to_string(),
        })
    }

    async fn structure_carousel(
        &self,
        _script: &str,
        _platform: &str,
        _canvas: &str,
        _ratio: &str,
    ) -> Result<StructuredCarousel, AiError> {
        let slides = (1..=2)
            .map(|i| StructuredSlide {
                slide_number: i,
                slide_type: if i == 1 { "hook" } else { "cta" }.to_string(),
                main_text: format!("slide {i}"),
                highlight_text: None,
                sub_text: None,
                data_visual: None,
                emoji: None,
                label: None,
                generation_prompt: None,
            })
            .collect();
        Ok(StructuredCarousel {
            topic: "Netflix AI".to_string(),
            total_slides: 2,
            color_accent: "#FF5733".to_string(),
            secondary_accent: None,
            slides,
        })
    }

    async fn structure_animations(
        &self,
        _script: &str,
    ) -> Result<StructuredAnimationSet, AiError> {
        let scenes = (1..=2)
            .map(|i| StructuredScene {
                scene_number: i,
                scene_type: "explanation".to_string(),
                main_text: format!("scene {i}"),
                sub_text: None,
                visual_type: "centered".to_string(),
                visual_elements: None,
                emoji: None,
                label: None,
                generation_prompt: None,
            })
            .collect();
        Ok(StructuredAnimationSet {
            topic: "Netflix AI".to_string(),
            total_scenes: 2,
            color_accent: "#FF5733".to_string(),
            secondary_accent: None,
            scenes,
        })
    }

    async fn structure_script(&self, _script: &str) -> Result<StructuredScript, AiError> {
        Ok(StructuredScript {
            folder_name: "netflix_ai".to_string(),
            title: "How Netflix personalizes covers with AI".to_string(),
            hook: "Did you know Netflix uses AI for its covers?".to_string(),
            sections: vec![ScriptSection {
                title: "The algorithm".to_string(),
                content: "It analyzes your taste.".to_string(),
            }],
            cta: "Follow for more!".to_string(),
        })
    }

    async fn generate_slide_html(&self, request: &SlideHtmlRequest) -> Result<String, AiError> {
        Ok(format!("<html>{}</html>", request.main_text))
    }

    async fn generate_scene_html(&self, request: &SceneHtmlRequest) -> Result<String, AiError> {
        Ok(format!("<html>{}</html>", request.main_text))
    }

    async fn generate_preview_html(
        &self,
        request: &PreviewHtmlRequest,
    ) -> Result<String, AiError> {
        Ok(format!("<html>{}</html>", request.main_text))
    }
}

/// Structuring service whose every call fails.
pub struct FailingStructurer;

macro_rules! failing {
    () => {
        Err(AiError::Api {
            status: 500,
            body: "upstream model error".to_string(),
        })
    };
}

#[async_trait]
impl Structurer for FailingStructurer {
    async fn extract_project_metadata(&self, _script: &str) -> Result<ProjectMetadata, AiError> {
        failing!()
    }

    async fn structure_carousel(
        &self,
        _script: &str,
        _platform: &str,
        _canvas: &str,
        _ratio: &str,
    ) -> Result<StructuredCarousel, AiError> {
        failing!()
    }

    async fn structure_animations(
        &self,
        _script: &str,
    ) -> Result<StructuredAnimationSet, AiError> {
        failing!()
    }

    async fn structure_script(&self, _script: &str) -> Result<StructuredScript, AiError> {
        failing!()
    }

    async fn generate_slide_html(&self, _request: &SlideHtmlRequest) -> Result<String, AiError> {
        failing!()
    }

    async fn generate_scene_html(&self, _request: &SceneHtmlRequest) -> Result<String, AiError> {
        failing!()
    }

    async fn generate_preview_html(
        &self,
        _request: &PreviewHtmlRequest,
    ) -> Result<String, AiError> {
        failing!()
    }
}

// ---------------------------------------------------------------------------
// Renderer doubles
// ---------------------------------------------------------------------------

/// Renderer producing a tiny real PNG per call.
pub struct StubRenderer;

#[async_trait]
impl HtmlRenderer for StubRenderer {
    async fn render_html_to_png(
        &self,
        _html: &str,
        _width: u32,
        _height: u32,
        _skip_logo: bool,
    ) -> Result<Vec<u8>, RenderError> {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]));
        let mut out = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .map_err(|e| RenderError::Image(e.to_string()))?;
        Ok(out)
    }
}

/// Renderer that reports a missing browser.
pub struct UnavailableRenderer;

#[async_trait]
impl HtmlRenderer for UnavailableRenderer {
    async fn render_html_to_png(
        &self,
        _html: &str,
        _width: u32,
        _height: u32,
        _skip_logo: bool,
    ) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::Unavailable)
    }
}
