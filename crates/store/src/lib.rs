//! Durable entity storage boundary.
//!
//! The pipeline talks to persistence exclusively through the
//! [`ContentStore`] trait. The backing implementation is free to be a
//! relational database; this crate ships [`MemoryStore`], an in-process
//! implementation that provides the same guarantees behind a single
//! `RwLock` and backs the test suites and local development.

mod memory;

use async_trait::async_trait;
use clipforge_core::error::CoreError;
use clipforge_core::model::{Animation, Carousel, FlagUpdate, Preview, Project, ProjectRecord};
use clipforge_core::types::EntityId;

pub use memory::MemoryStore;

/// Errors surfaced by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend failed (connection, constraint, serialization, ...).
    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Internal(err.to_string())
    }
}

/// Entity store for projects and their generated artifacts.
///
/// Contract relied on by the pipeline:
///
/// - `replace_*` applies delete-plus-insert as **one atomic mutation**: no
///   reader ever observes a project with both the old and the new artifact
///   set, or with a partially inserted one.
/// - `delete_project` cascades to every child artifact and sub-unit.
/// - Hydrated reads return carousels and animations newest-first with
///   sub-units in ordinal order, and previews in insertion order.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn insert_project(&self, project: Project) -> Result<(), StoreError>;
    async fn find_project(&self, id: EntityId) -> Result<Option<Project>, StoreError>;
    /// Fetch a project with all child artifacts attached.
    async fn get_record(&self, id: EntityId) -> Result<Option<ProjectRecord>, StoreError>;
    /// All projects, newest-first, hydrated.
    async fn list_records(&self) -> Result<Vec<ProjectRecord>, StoreError>;
    /// Delete a project and cascade to all children. Returns `false` if the
    /// project did not exist.
    async fn delete_project(&self, id: EntityId) -> Result<bool, StoreError>;
    /// Apply a partial completion-flag update. Returns `false` if the
    /// project did not exist.
    async fn update_flags(&self, id: EntityId, update: FlagUpdate) -> Result<bool, StoreError>;

    /// Delete all carousels of a project, returning the number removed.
    async fn delete_carousels(&self, project_id: EntityId) -> Result<u64, StoreError>;
    /// Atomically replace the project's carousel set.
    async fn replace_carousels(
        &self,
        project_id: EntityId,
        carousels: Vec<Carousel>,
    ) -> Result<(), StoreError>;
    /// The most recently persisted carousel, if any.
    async fn latest_carousel(&self, project_id: EntityId)
        -> Result<Option<Carousel>, StoreError>;

    async fn delete_animations(&self, project_id: EntityId) -> Result<u64, StoreError>;
    async fn replace_animations(
        &self,
        project_id: EntityId,
        animations: Vec<Animation>,
    ) -> Result<(), StoreError>;

    async fn delete_previews(&self, project_id: EntityId) -> Result<u64, StoreError>;
    async fn replace_previews(
        &self,
        project_id: EntityId,
        previews: Vec<Preview>,
    ) -> Result<(), StoreError>;
}
