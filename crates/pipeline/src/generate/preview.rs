//! Preview thumbnail generation.
//!
//! Two platform-specific previews are generated concurrently from the same
//! source text and persisted together.

use clipforge_ai::types::PreviewHtmlRequest;
use clipforge_ai::Structurer;
use clipforge_core::error::CoreError;
use clipforge_core::model::{ArtifactStatus, Preview, PreviewPlatform};
use clipforge_core::types::EntityId;

use super::generation_failed;

/// Generate the instagram/tiktok preview pair.
pub async fn generate_previews(
    structurer: &dyn Structurer,
    project_id: EntityId,
    main_text: &str,
    color_accent: &str,
    secondary_accent: Option<&str>,
) -> Result<Vec<Preview>, CoreError> {
    let (instagram, tiktok) = tokio::try_join!(
        build_preview(
            structurer,
            project_id,
            main_text,
            PreviewPlatform::Instagram,
            color_accent,
            secondary_accent,
        ),
        build_preview(
            structurer,
            project_id,
            main_text,
            PreviewPlatform::Tiktok,
            color_accent,
            secondary_accent,
        ),
    )?;

    tracing::info!(project_id = %project_id, "previews generated");
    Ok(vec![instagram, tiktok])
}

async fn build_preview(
    structurer: &dyn Structurer,
    project_id: EntityId,
    main_text: &str,
    platform: PreviewPlatform,
    color_accent: &str,
    secondary_accent: Option<&str>,
) -> Result<Preview, CoreError> {
    let (width, height) = platform.frame_size();
    let generation_prompt = format!(
        "Create a scroll-stopping {} preview thumbnail for: \"{main_text}\"",
        platform.as_str()
    );

    let request = PreviewHtmlRequest {
        generation_prompt: generation_prompt.clone(),
        width,
        height,
        color_accent: color_accent.to_string(),
        secondary_accent: secondary_accent.map(str::to_string),
        main_text: main_text.to_string(),
        highlight_text: None,
        sub_text: None,
        emoji: None,
        label: None,
    };

    let html = structurer
        .generate_preview_html(&request)
        .await
        .map_err(|e| generation_failed("preview", e))?;

    let now = chrono::Utc::now();
    Ok(Preview {
        id: EntityId::new_v4(),
        project_id,
        platform,
        width,
        height,
        color_accent: color_accent.to_string(),
        secondary_accent: secondary_accent.map(str::to_string),
        main_text: main_text.to_string(),
        highlight_text: None,
        sub_text: None,
        emoji: None,
        label: None,
        generation_prompt,
        generated_html: Some(html),
        status: ArtifactStatus::Completed,
        created_at: now,
        updated_at: now,
    })
}
