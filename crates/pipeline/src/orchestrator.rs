//! Per-project generation orchestration.
//!
//! Each step loads the project, deletes the existing artifacts of its
//! type, invokes the matching generator, persists the new set in one store
//! mutation, and flips the corresponding completion flag. A failed step
//! leaves the prior (already-deleted) artifacts absent; retry means
//! rerunning the whole step.

use std::sync::Arc;

use clipforge_ai::types::StructuredScript;
use clipforge_ai::Structurer;
use clipforge_core::error::CoreError;
use clipforge_core::model::{FlagUpdate, Project, ProjectRecord};
use clipforge_core::stage::PipelineStage;
use clipforge_core::types::{EntityId, DEFAULT_COLOR_ACCENT};
use clipforge_core::validation::validate_script;
use clipforge_render::HtmlRenderer;
use clipforge_store::ContentStore;

use crate::export;
use crate::generate::{self, generation_failed};

/// Orchestrates the generation pipeline over the store and structuring
/// service. Cheap to share behind an `Arc`.
pub struct ContentPipeline {
    store: Arc<dyn ContentStore>,
    structurer: Arc<dyn Structurer>,
}

impl ContentPipeline {
    pub fn new(store: Arc<dyn ContentStore>, structurer: Arc<dyn Structurer>) -> Self {
        Self { store, structurer }
    }

    // ---- projects ----

    /// Create a project from a raw script: extract metadata through the
    /// structuring service, derive the thumbnail URL, persist.
    pub async fn create_project(
        &self,
        script: &str,
        user_id: Option<String>,
    ) -> Result<ProjectRecord, CoreError> {
        validate_script(script)?;

        let metadata = self
            .structurer
            .extract_project_metadata(script)
            .await
            .map_err(|e| generation_failed("project metadata", e))?;

        let thumbnail = format!(
            "https://picsum.photos/seed/{}/400/300",
            metadata.thumbnail_seed
        );

        let now = chrono::Utc::now();
        let project = Project {
            id: EntityId::new_v4(),
            name: metadata.name,
            title: metadata.title,
            folder_name: metadata.folder_name,
            hook: metadata.hook,
            thumbnail,
            source_script: script.to_string(),
            user_id,
            has_carousel: false,
            has_animations: false,
            has_preview: false,
            created_at: now,
            updated_at: now,
        };
        let id = project.id;

        self.store.insert_project(project).await?;
        tracing::info!(project_id = %id, "project created");
        self.require_record(id).await
    }

    pub async fn get_project(&self, id: EntityId) -> Result<ProjectRecord, CoreError> {
        self.require_record(id).await
    }

    pub async fn list_projects(&self) -> Result<Vec<ProjectRecord>, CoreError> {
        Ok(self.store.list_records().await?)
    }

    /// Delete a project, cascading to all artifacts.
    pub async fn delete_project(&self, id: EntityId) -> Result<(), CoreError> {
        if self.store.delete_project(id).await? {
            tracing::info!(project_id = %id, "project deleted");
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Project",
                id,
            })
        }
    }

    // ---- pipeline steps ----

    /// Step 1/3: regenerate the project's carousel.
    pub async fn generate_carousel(&self, id: EntityId) -> Result<ProjectRecord, CoreError> {
        let project = self.require_project(id).await?;
        tracing::info!(project_id = %id, "generating carousel");

        self.store.delete_carousels(id).await?;
        let carousel =
            generate::generate_carousel(self.structurer.as_ref(), id, &project.source_script)
                .await?;
        self.store.replace_carousels(id, vec![carousel]).await?;
        self.store.update_flags(id, FlagUpdate::carousel(true)).await?;

        self.require_record(id).await
    }

    /// Step 2/3: regenerate the project's animation set.
    pub async fn generate_animations(&self, id: EntityId) -> Result<ProjectRecord, CoreError> {
        let project = self.require_project(id).await?;
        tracing::info!(project_id = %id, "generating animations");

        self.store.delete_animations(id).await?;
        let animation =
            generate::generate_animation(self.structurer.as_ref(), id, &project.source_script)
                .await?;
        self.store.replace_animations(id, vec![animation]).await?;
        self.store
            .update_flags(id, FlagUpdate::animations(true))
            .await?;

        self.require_record(id).await
    }

    /// Step 3/3: regenerate the preview pair. Accent colors follow the
    /// most recently generated carousel, falling back to the default
    /// accent when none exists.
    pub async fn generate_previews(&self, id: EntityId) -> Result<ProjectRecord, CoreError> {
        let project = self.require_project(id).await?;
        tracing::info!(project_id = %id, "generating previews");

        self.store.delete_previews(id).await?;

        let accent_source = self.store.latest_carousel(id).await?;
        let (color_accent, secondary_accent) = match &accent_source {
            Some(carousel) => (
                carousel.color_accent.as_str(),
                carousel.secondary_accent.as_deref(),
            ),
            None => (DEFAULT_COLOR_ACCENT, None),
        };

        let previews = generate::generate_previews(
            self.structurer.as_ref(),
            id,
            &project.hook,
            color_accent,
            secondary_accent,
        )
        .await?;
        self.store.replace_previews(id, previews).await?;
        self.store.update_flags(id, FlagUpdate::preview(true)).await?;

        self.require_record(id).await
    }

    /// Run all three steps strictly in order. The first failing step
    /// aborts the sequence; completion flags then reflect exactly the
    /// steps that succeeded.
    pub async fn generate_all(&self, id: EntityId) -> Result<ProjectRecord, CoreError> {
        let mut stage = PipelineStage::Idle.next();
        loop {
            match stage {
                PipelineStage::Carousel => {
                    tracing::info!(project_id = %id, stage = stage.as_str(), "pipeline step");
                    self.generate_carousel(id).await?;
                }
                PipelineStage::Animations => {
                    tracing::info!(project_id = %id, stage = stage.as_str(), "pipeline step");
                    self.generate_animations(id).await?;
                }
                PipelineStage::Previews => {
                    tracing::info!(project_id = %id, stage = stage.as_str(), "pipeline step");
                    self.generate_previews(id).await?;
                }
                PipelineStage::Complete | PipelineStage::Idle => break,
            }
            stage = stage.next();
        }

        tracing::info!(project_id = %id, "pipeline complete");
        self.require_record(id).await
    }

    // ---- content without persistence ----

    /// Structure a complete short-video script from raw text. Not
    /// persisted; returned directly to the caller.
    pub async fn generate_script(&self, script: &str) -> Result<StructuredScript, CoreError> {
        validate_script(script)?;
        self.structurer
            .structure_script(script)
            .await
            .map_err(|e| generation_failed("script", e))
    }

    // ---- export ----

    /// Render every generated HTML fragment of the project and pack the
    /// PNGs into a zip archive. Returns the suggested file name and the
    /// archive bytes.
    pub async fn export_archive(
        &self,
        id: EntityId,
        renderer: &dyn HtmlRenderer,
    ) -> Result<(String, Vec<u8>), CoreError> {
        let record = self.require_record(id).await?;
        let bytes = export::build_archive(&record, renderer).await?;
        let file_name = format!("{}.zip", record.project.folder_name);
        Ok((file_name, bytes))
    }

    // ---- private helpers ----

    async fn require_project(&self, id: EntityId) -> Result<Project, CoreError> {
        self.store
            .find_project(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })
    }

    async fn require_record(&self, id: EntityId) -> Result<ProjectRecord, CoreError> {
        self.store
            .get_record(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id,
            })
    }
}
