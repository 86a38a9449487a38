use serde::{Deserialize, Serialize};

use crate::model::{ArtifactStatus, SlideKind};
use crate::types::{EntityId, Timestamp};

/// A carousel artifact. The slide set is replaced wholesale on
/// regeneration, never patched: `total_slides` always equals `slides.len()`
/// and slide ordinals are dense starting at 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Carousel {
    pub id: EntityId,
    pub project_id: EntityId,
    pub topic: String,
    pub total_slides: u32,
    pub color_accent: String,
    pub secondary_accent: Option<String>,
    /// Target platform descriptor, e.g. `Instagram`.
    pub platform: String,
    /// Canvas descriptor, e.g. `1080x1350`.
    pub canvas: String,
    /// Aspect ratio descriptor, e.g. `4:5`.
    pub ratio: String,
    pub source_script: String,
    pub status: ArtifactStatus,
    pub slides: Vec<Slide>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One carousel slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub id: EntityId,
    /// 1-based position within the carousel.
    pub slide_number: u32,
    pub slide_type: SlideKind,
    pub main_text: String,
    pub highlight_text: Option<String>,
    pub sub_text: Option<String>,
    pub data_visual: Option<String>,
    pub emoji: Option<String>,
    pub label: Option<String>,
    pub generation_prompt: String,
    /// Null only before the HTML-generation phase of the creating
    /// transaction completes.
    pub generated_html: Option<String>,
}
