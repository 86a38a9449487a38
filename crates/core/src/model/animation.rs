use serde::{Deserialize, Serialize};

use crate::model::{ArtifactStatus, SceneKind, VisualLayout};
use crate::types::{EntityId, Timestamp};

/// An animation artifact: an ordered set of scenes. Same wholesale-replace
/// and dense-ordinal semantics as [`crate::model::Carousel`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animation {
    pub id: EntityId,
    pub project_id: EntityId,
    pub topic: String,
    pub total_scenes: u32,
    pub color_accent: String,
    pub secondary_accent: Option<String>,
    pub source_script: String,
    pub status: ArtifactStatus,
    pub scenes: Vec<Scene>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One animation scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub id: EntityId,
    /// 1-based position within the animation.
    pub scene_number: u32,
    pub scene_type: SceneKind,
    pub main_text: String,
    pub sub_text: Option<String>,
    pub visual_type: VisualLayout,
    /// Free-text element descriptions feeding the visual layout.
    pub visual_elements: Vec<String>,
    pub emoji: Option<String>,
    pub label: Option<String>,
    pub generation_prompt: String,
    pub generated_html: Option<String>,
}
