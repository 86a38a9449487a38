//! Wire types exchanged with the structuring service.
//!
//! Sub-unit type labels arrive as free text (`slide_type`, `scene_type`,
//! `visual_type`); coercion into the closed domain vocabularies happens in
//! the pipeline, not here.

use serde::{Deserialize, Serialize};

/// Metadata extracted from a raw script when a project is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub title: String,
    pub folder_name: String,
    pub hook: String,
    /// Seed for the placeholder thumbnail URL.
    pub thumbnail_seed: String,
}

/// A structured carousel as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredCarousel {
    pub topic: String,
    pub total_slides: u32,
    pub color_accent: String,
    pub secondary_accent: Option<String>,
    pub slides: Vec<StructuredSlide>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredSlide {
    pub slide_number: u32,
    /// Free-text type label, e.g. `hook`, `content`, `cta`.
    pub slide_type: String,
    pub main_text: String,
    pub highlight_text: Option<String>,
    pub sub_text: Option<String>,
    pub data_visual: Option<String>,
    pub emoji: Option<String>,
    pub label: Option<String>,
    pub generation_prompt: Option<String>,
}

/// A structured animation set as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredAnimationSet {
    pub topic: String,
    pub total_scenes: u32,
    pub color_accent: String,
    pub secondary_accent: Option<String>,
    pub scenes: Vec<StructuredScene>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredScene {
    pub scene_number: u32,
    /// Free-text type label, e.g. `intro`, `explanation`.
    pub scene_type: String,
    pub main_text: String,
    pub sub_text: Option<String>,
    /// Free-text layout label, e.g. `two-column`, `dashboard`.
    pub visual_type: String,
    pub visual_elements: Option<Vec<String>>,
    pub emoji: Option<String>,
    pub label: Option<String>,
    pub generation_prompt: Option<String>,
}

/// A structured short-video script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredScript {
    pub folder_name: String,
    pub title: String,
    pub hook: String,
    pub sections: Vec<ScriptSection>,
    pub cta: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptSection {
    pub title: String,
    pub content: String,
}

// ---------------------------------------------------------------------------
// HTML-generation requests
// ---------------------------------------------------------------------------

/// Request payload for a single slide's HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideHtmlRequest {
    pub generation_prompt: String,
    pub slide_number: u32,
    pub total_slides: u32,
    pub width: u32,
    pub height: u32,
    pub color_accent: String,
    pub secondary_accent: Option<String>,
    pub main_text: String,
    pub highlight_text: Option<String>,
    pub sub_text: Option<String>,
    pub data_visual: Option<String>,
    pub emoji: Option<String>,
    pub label: Option<String>,
}

/// Request payload for a single scene's HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneHtmlRequest {
    pub generation_prompt: String,
    pub scene_number: u32,
    pub total_scenes: u32,
    pub color_accent: String,
    pub secondary_accent: Option<String>,
    pub main_text: String,
    pub sub_text: Option<String>,
    pub visual_type: String,
    pub visual_elements: Vec<String>,
    pub emoji: Option<String>,
    pub label: Option<String>,
}

/// Request payload for a preview thumbnail's HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewHtmlRequest {
    pub generation_prompt: String,
    pub width: u32,
    pub height: u32,
    pub color_accent: String,
    pub secondary_accent: Option<String>,
    pub main_text: String,
    pub highlight_text: Option<String>,
    pub sub_text: Option<String>,
    pub emoji: Option<String>,
    pub label: Option<String>,
}
