//! Shared test doubles for the pipeline suites.
#![allow(dead_code)]

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use clipforge_ai::types::{
    PreviewHtmlRequest, ProjectMetadata, SceneHtmlRequest, ScriptSection, SlideHtmlRequest,
    StructuredAnimationSet, StructuredCarousel, StructuredScene, StructuredScript,
    StructuredSlide,
};
use clipforge_ai::{AiError, Structurer};
use clipforge_render::{HtmlRenderer, RenderError};

/// Accent colors the scripted service reports for carousels.
pub const CAROUSEL_ACCENT: &str = "#1F6FEB";
pub const CAROUSEL_SECONDARY: &str = "#FFD166";

pub const SAMPLE_SCRIPT: &str = "Did you know Netflix uses AI for its covers?\n\
    Every time you open Netflix, the artwork is personalized for you.";

/// Which call the scripted service should fail on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Nothing,
    Metadata,
    Carousel,
    Animations,
    Previews,
}

/// Deterministic [`Structurer`] double.
///
/// Structured sub-units deliberately carry bogus ordinals and totals to
/// prove the generators normalize them. With `stagger_html` set, HTML
/// generation sleeps longer for earlier sub-units so completion order is
/// the reverse of input order.
pub struct ScriptedStructurer {
    pub slide_count: u32,
    pub scene_count: u32,
    pub fail_on: FailOn,
    pub stagger_html: bool,
}

impl Default for ScriptedStructurer {
    fn default() -> Self {
        Self {
            slide_count: 3,
            scene_count: 4,
            fail_on: FailOn::Nothing,
            stagger_html: false,
        }
    }
}

impl ScriptedStructurer {
    fn scripted_failure(&self) -> AiError {
        AiError::Api {
            status: 500,
            body: "scripted failure".to_string(),
        }
    }

    async fn stagger(&self, ordinal: u32, total: u32) {
        if self.stagger_html {
            let rank = total.saturating_sub(ordinal) as u64;
            tokio::time::sleep(Duration::from_millis(10 * rank)).await;
        }
    }
}

#[async_trait]
impl Structurer for ScriptedStructurer {
    async fn extract_project_metadata(&self, _script: &str) -> Result<ProjectMetadata, AiError> {
        if self.fail_on == FailOn::Metadata {
            return Err(self.scripted_failure());
        }
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
        if self.fail_on == FailOn::Carousel {
            return Err(self.scripted_failure());
        }
        let slides = (0..self.slide_count)
            .map(|i| StructuredSlide {
                // Bogus on purpose: every slide claims ordinal 7.
                slide_number: 7,
                slide_type: match i {
                    0 => "hook".to_string(),
                    _ if i == self.slide_count - 1 => "cta".to_string(),
                    _ => "content".to_string(),
                },
                main_text: format!("slide-main-{i}"),
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
            // Bogus on purpose: the declared total disagrees with the list.
            total_slides: 99,
            color_accent: CAROUSEL_ACCENT.to_string(),
            secondary_accent: Some(CAROUSEL_SECONDARY.to_string()),
            slides,
        })
    }

    async fn structure_animations(
        &self,
        _script: &str,
    ) -> Result<StructuredAnimationSet, AiError> {
        if self.fail_on == FailOn::Animations {
            return Err(self.scripted_failure());
        }
        let scenes = (0..self.scene_count)
            .map(|i| StructuredScene {
                scene_number: 7,
                scene_type: if i == 0 { "intro" } else { "explanation" }.to_string(),
                main_text: format!("scene-main-{i}"),
                sub_text: None,
                visual_type: "two-column".to_string(),
                visual_elements: Some(vec![format!("element-{i}")]),
                emoji: None,
                label: None,
                generation_prompt: None,
            })
            .collect();
        Ok(StructuredAnimationSet {
            topic: "Netflix AI".to_string(),
            total_scenes: 99,
            color_accent: CAROUSEL_ACCENT.to_string(),
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
            cta: "Follow for more tech curiosities!".to_string(),
        })
    }

    async fn generate_slide_html(&self, request: &SlideHtmlRequest) -> Result<String, AiError> {
        self.stagger(request.slide_number, request.total_slides).await;
        Ok(format!("<html>{}</html>", request.main_text))
    }

    async fn generate_scene_html(&self, request: &SceneHtmlRequest) -> Result<String, AiError> {
        self.stagger(request.scene_number, request.total_scenes).await;
        Ok(format!("<html>{}</html>", request.main_text))
    }

    async fn generate_preview_html(
        &self,
        request: &PreviewHtmlRequest,
    ) -> Result<String, AiError> {
        if self.fail_on == FailOn::Previews {
            return Err(self.scripted_failure());
        }
        Ok(format!(
            "<html>{} {}x{}</html>",
            request.main_text, request.width, request.height
        ))
    }
}

/// [`HtmlRenderer`] double producing a tiny real PNG per call.
#[derive(Default)]
pub struct StubRenderer {
    pub calls: AtomicUsize,
}

#[async_trait]
impl HtmlRenderer for StubRenderer {
    async fn render_html_to_png(
        &self,
        _html: &str,
        width: u32,
        height: u32,
        _skip_logo: bool,
    ) -> Result<Vec<u8>, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // A 2x2 stand-in; real dimensions are the engine's concern.
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([width as u8, height as u8, 0, 255]));
        let mut out = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
            .map_err(|e| RenderError::Image(e.to_string()))?;
        Ok(out)
    }
}

/// [`HtmlRenderer`] double that reports a missing browser.
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
