//! In-memory [`ContentStore`] implementation.
//!
//! All tables live behind one `tokio::sync::RwLock`; every mutation takes
//! the write guard, which is what makes `replace_*` and the cascade delete
//! atomic for concurrent readers.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use clipforge_core::model::{Animation, Carousel, FlagUpdate, Preview, Project, ProjectRecord};
use clipforge_core::types::EntityId;

use crate::{ContentStore, StoreError};

#[derive(Default)]
struct Tables {
    projects: HashMap<EntityId, Project>,
    carousels: HashMap<EntityId, Vec<Carousel>>,
    animations: HashMap<EntityId, Vec<Animation>>,
    previews: HashMap<EntityId, Vec<Preview>>,
}

impl Tables {
    fn hydrate(&self, project: &Project) -> ProjectRecord {
        // Carousels and animations newest-first; artifact sets are replaced
        // wholesale so these vectors rarely hold more than one entry.
        let mut carousels = self.carousels.get(&project.id).cloned().unwrap_or_default();
        carousels.reverse();
        let mut animations = self
            .animations
            .get(&project.id)
            .cloned()
            .unwrap_or_default();
        animations.reverse();
        let previews = self.previews.get(&project.id).cloned().unwrap_or_default();

        ProjectRecord {
            project: project.clone(),
            carousels,
            animations,
            previews,
        }
    }
}

/// In-process entity store.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn insert_project(&self, project: Project) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.projects.insert(project.id, project);
        Ok(())
    }

    async fn find_project(&self, id: EntityId) -> Result<Option<Project>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.projects.get(&id).cloned())
    }

    async fn get_record(&self, id: EntityId) -> Result<Option<ProjectRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.projects.get(&id).map(|p| tables.hydrate(p)))
    }

    async fn list_records(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        let tables = self.tables.read().await;
        let mut records: Vec<ProjectRecord> =
            tables.projects.values().map(|p| tables.hydrate(p)).collect();
        records.sort_by(|a, b| b.project.created_at.cmp(&a.project.created_at));
        Ok(records)
    }

    async fn delete_project(&self, id: EntityId) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let existed = tables.projects.remove(&id).is_some();
        if existed {
            // Cascade: no orphaned artifacts remain queryable.
            tables.carousels.remove(&id);
            tables.animations.remove(&id);
            tables.previews.remove(&id);
            tracing::debug!(project_id = %id, "project deleted with cascade");
        }
        Ok(existed)
    }

    async fn update_flags(&self, id: EntityId, update: FlagUpdate) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(project) = tables.projects.get_mut(&id) else {
            return Ok(false);
        };
        if let Some(value) = update.has_carousel {
            project.has_carousel = value;
        }
        if let Some(value) = update.has_animations {
            project.has_animations = value;
        }
        if let Some(value) = update.has_preview {
            project.has_preview = value;
        }
        project.updated_at = chrono::Utc::now();
        Ok(true)
    }

    async fn delete_carousels(&self, project_id: EntityId) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().await;
        let removed = tables
            .carousels
            .remove(&project_id)
            .map(|c| c.len() as u64)
            .unwrap_or(0);
        Ok(removed)
    }

    async fn replace_carousels(
        &self,
        project_id: EntityId,
        carousels: Vec<Carousel>,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.carousels.insert(project_id, carousels);
        Ok(())
    }

    async fn latest_carousel(
        &self,
        project_id: EntityId,
    ) -> Result<Option<Carousel>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .carousels
            .get(&project_id)
            .and_then(|c| c.last().cloned()))
    }

    async fn delete_animations(&self, project_id: EntityId) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().await;
        let removed = tables
            .animations
            .remove(&project_id)
            .map(|a| a.len() as u64)
            .unwrap_or(0);
        Ok(removed)
    }

    async fn replace_animations(
        &self,
        project_id: EntityId,
        animations: Vec<Animation>,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.animations.insert(project_id, animations);
        Ok(())
    }

    async fn delete_previews(&self, project_id: EntityId) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().await;
        let removed = tables
            .previews
            .remove(&project_id)
            .map(|p| p.len() as u64)
            .unwrap_or(0);
        Ok(removed)
    }

    async fn replace_previews(
        &self,
        project_id: EntityId,
        previews: Vec<Preview>,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.previews.insert(project_id, previews);
        Ok(())
    }
}
