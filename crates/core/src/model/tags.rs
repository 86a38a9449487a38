//! Closed tag vocabularies for artifacts and their sub-units.
//!
//! The structuring service returns free-text type labels. Every vocabulary
//! here exposes a *total* `from_label` function with a fixed fallback
//! variant: unknown labels coerce to the fallback instead of failing. This
//! is intentional lossy normalization -- a stray label from the service must
//! not abort an otherwise valid artifact.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Artifact status
// ---------------------------------------------------------------------------

/// Lifecycle status of a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtifactStatus {
    Draft,
    Generating,
    Completed,
    Failed,
}

impl ArtifactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Generating => "GENERATING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }
}

// ---------------------------------------------------------------------------
// Slide kinds
// ---------------------------------------------------------------------------

/// Semantic role of a carousel slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlideKind {
    Hook,
    Content,
    Cta,
}

impl SlideKind {
    /// Coerce a free-text label, case-insensitively.
    /// Unknown labels become [`SlideKind::Content`].
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "HOOK" => Self::Hook,
            "CTA" => Self::Cta,
            _ => Self::Content,
        }
    }
}

// ---------------------------------------------------------------------------
// Scene kinds
// ---------------------------------------------------------------------------

/// Semantic role of an animation scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SceneKind {
    Intro,
    Explanation,
    Visualization,
    Comparison,
    Cta,
}

impl SceneKind {
    /// Coerce a free-text label, case-insensitively.
    /// Unknown labels become [`SceneKind::Explanation`].
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "INTRO" => Self::Intro,
            "VISUALIZATION" => Self::Visualization,
            "COMPARISON" => Self::Comparison,
            "CTA" => Self::Cta,
            _ => Self::Explanation,
        }
    }
}

// ---------------------------------------------------------------------------
// Scene visual layouts
// ---------------------------------------------------------------------------

/// Visual layout template of an animation scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisualLayout {
    TwoColumn,
    Centered,
    FlowDiagram,
    ScatterPlot,
    Grid,
    Comparison,
    Dashboard,
}

impl VisualLayout {
    /// Coerce a free-text label: uppercased, hyphens normalized to
    /// underscores. Unknown labels become [`VisualLayout::Centered`].
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_uppercase().replace('-', "_").as_str() {
            "TWO_COLUMN" => Self::TwoColumn,
            "FLOW_DIAGRAM" => Self::FlowDiagram,
            "SCATTER_PLOT" => Self::ScatterPlot,
            "GRID" => Self::Grid,
            "COMPARISON" => Self::Comparison,
            "DASHBOARD" => Self::Dashboard,
            _ => Self::Centered,
        }
    }
}

// ---------------------------------------------------------------------------
// Preview platforms
// ---------------------------------------------------------------------------

/// Target platform of a preview thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewPlatform {
    Instagram,
    Tiktok,
}

impl PreviewPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Tiktok => "tiktok",
        }
    }

    /// Canvas size for this platform: instagram is 9:16 portrait, tiktok
    /// 3:4 portrait.
    pub fn frame_size(&self) -> (u32, u32) {
        match self {
            Self::Instagram => (1080, 1920),
            Self::Tiktok => (1080, 1440),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
