use serde::{Deserialize, Serialize};

use crate::model::{Animation, Carousel, Preview};
use crate::types::{EntityId, Timestamp};

/// A content project created from one source script.
///
/// The three completion flags are owned by the generation pipeline: each
/// flips to true when the corresponding step persists its artifact set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    /// Short display name extracted by the structuring service.
    pub name: String,
    pub title: String,
    /// Filesystem-safe name, also used for the export archive.
    pub folder_name: String,
    /// Opening line of the script, reused as the preview main text.
    pub hook: String,
    /// Placeholder thumbnail URL derived from the extracted seed.
    pub thumbnail: String,
    pub source_script: String,
    pub user_id: Option<String>,
    pub has_carousel: bool,
    pub has_animations: bool,
    pub has_preview: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project with all child artifacts attached: carousels and animations
/// newest-first with sub-units in ordinal order, previews newest-first.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRecord {
    #[serde(flatten)]
    pub project: Project,
    pub carousels: Vec<Carousel>,
    pub animations: Vec<Animation>,
    pub previews: Vec<Preview>,
}

/// Partial update for the completion flags; `None` fields are left as-is.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FlagUpdate {
    pub has_carousel: Option<bool>,
    pub has_animations: Option<bool>,
    pub has_preview: Option<bool>,
}

impl FlagUpdate {
    pub fn carousel(value: bool) -> Self {
        Self {
            has_carousel: Some(value),
            ..Self::default()
        }
    }

    pub fn animations(value: bool) -> Self {
        Self {
            has_animations: Some(value),
            ..Self::default()
        }
    }

    pub fn preview(value: bool) -> Self {
        Self {
            has_preview: Some(value),
            ..Self::default()
        }
    }
}
