use serde::{Deserialize, Serialize};

use crate::model::{ArtifactStatus, PreviewPlatform};
use crate::types::{EntityId, Timestamp};

/// A preview thumbnail artifact. Unlike carousels and animations a preview
/// has no sub-units: the whole thumbnail is a single generated HTML blob.
/// Two previews (one per platform) are generated together per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preview {
    pub id: EntityId,
    pub project_id: EntityId,
    pub platform: PreviewPlatform,
    pub width: u32,
    pub height: u32,
    pub color_accent: String,
    pub secondary_accent: Option<String>,
    pub main_text: String,
    pub highlight_text: Option<String>,
    pub sub_text: Option<String>,
    pub emoji: Option<String>,
    pub label: Option<String>,
    pub generation_prompt: String,
    pub generated_html: Option<String>,
    pub status: ArtifactStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
