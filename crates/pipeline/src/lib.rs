//! The generation pipeline.
//!
//! Turns one source script into three dependent, independently-regenerable
//! artifact families (carousel, animations, previews), persists them
//! through the [`clipforge_store::ContentStore`] port, and exports rendered
//! PNGs as a zip archive.

pub mod export;
pub mod generate;
pub mod orchestrator;

pub use orchestrator::ContentPipeline;
