//! Persisted entities and their tag vocabularies.

mod animation;
mod carousel;
mod preview;
mod project;
mod tags;

pub use animation::{Animation, Scene};
pub use carousel::{Carousel, Slide};
pub use preview::Preview;
pub use project::{FlagUpdate, Project, ProjectRecord};
pub use tags::{ArtifactStatus, PreviewPlatform, SceneKind, SlideKind, VisualLayout};
