//! Artifact generators.
//!
//! Shared contract: one structuring call obtains the artifact skeleton,
//! then per-sub-unit HTML generation fans out concurrently -- each task
//! carries its original index and results are reassembled by that index,
//! never by completion order. Any failure in either phase aborts the whole
//! artifact; nothing partial ever reaches the store.
//!
//! Ordinals are normalized on assembly: the persisted sub-unit number is
//! the 1-based position in the structured list and the persisted total is
//! the list length, regardless of what the service claimed.

mod animation;
mod carousel;
mod preview;

pub use animation::{generate_animation, SCENE_FRAME_HEIGHT, SCENE_FRAME_WIDTH};
pub use carousel::{
    generate_carousel, CAROUSEL_CANVAS, CAROUSEL_HEIGHT, CAROUSEL_PLATFORM, CAROUSEL_RATIO,
    CAROUSEL_WIDTH,
};
pub use preview::generate_previews;

use clipforge_ai::AiError;
use clipforge_core::error::CoreError;

/// Log the full failure detail and wrap it into the opaque caller-facing
/// error for the given artifact.
pub(crate) fn generation_failed(artifact: &'static str, error: AiError) -> CoreError {
    tracing::error!(artifact, error = %error, "generation failed");
    CoreError::GenerationFailed { artifact }
}

/// Await index-carrying HTML tasks and reassemble the results into their
/// original order.
pub(crate) async fn join_indexed<F>(tasks: Vec<F>) -> Result<Vec<String>, AiError>
where
    F: std::future::Future<Output = Result<(usize, String), AiError>>,
{
    let mut pairs = futures::future::try_join_all(tasks).await?;
    pairs.sort_by_key(|(index, _)| *index);
    Ok(pairs.into_iter().map(|(_, html)| html).collect())
}
