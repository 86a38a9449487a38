//! Domain model and shared primitives for the clipforge backend.
//!
//! This crate has no I/O: entities, tag vocabularies, the error taxonomy,
//! validation helpers, and the pipeline stage machine all live here and are
//! consumed by the store, pipeline, and API crates.

pub mod error;
pub mod model;
pub mod stage;
pub mod types;
pub mod validation;
