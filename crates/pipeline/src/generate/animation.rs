//! Animation set generation.

use clipforge_ai::types::{SceneHtmlRequest, StructuredScene};
use clipforge_ai::Structurer;
use clipforge_core::error::CoreError;
use clipforge_core::model::{Animation, ArtifactStatus, Scene, SceneKind, VisualLayout};
use clipforge_core::types::EntityId;

use super::{generation_failed, join_indexed};

/// Animation scenes rasterize at 9:16 portrait.
pub const SCENE_FRAME_WIDTH: u32 = 1080;
pub const SCENE_FRAME_HEIGHT: u32 = 1920;

/// Structure an animation set from the script and generate one HTML
/// fragment per scene, concurrently.
pub async fn generate_animation(
    structurer: &dyn Structurer,
    project_id: EntityId,
    script: &str,
) -> Result<Animation, CoreError> {
    let structured = structurer
        .structure_animations(script)
        .await
        .map_err(|e| generation_failed("animation set", e))?;

    if structured.scenes.is_empty() {
        tracing::error!("structuring returned an animation set with no scenes");
        return Err(CoreError::GenerationFailed {
            artifact: "animation set",
        });
    }

    let requests: Vec<SceneHtmlRequest> = structured
        .scenes
        .iter()
        .enumerate()
        .map(|(index, scene)| {
            scene_request(
                scene,
                index,
                structured.scenes.len() as u32,
                &structured.color_accent,
                structured.secondary_accent.as_deref(),
            )
        })
        .collect();

    let tasks: Vec<_> = requests
        .iter()
        .enumerate()
        .map(|(index, request)| async move {
            structurer
                .generate_scene_html(request)
                .await
                .map(|html| (index, html))
        })
        .collect();
    let html_by_index = join_indexed(tasks)
        .await
        .map_err(|e| generation_failed("animation set", e))?;

    let scenes: Vec<Scene> = structured
        .scenes
        .into_iter()
        .zip(html_by_index)
        .enumerate()
        .map(|(index, (scene, html))| {
            let scene_number = index as u32 + 1;
            let generation_prompt = format!("Scene {scene_number}: {}", scene.main_text);
            Scene {
                id: EntityId::new_v4(),
                scene_number,
                scene_type: SceneKind::from_label(&scene.scene_type),
                main_text: scene.main_text,
                sub_text: scene.sub_text,
                visual_type: VisualLayout::from_label(&scene.visual_type),
                visual_elements: scene.visual_elements.unwrap_or_default(),
                emoji: scene.emoji,
                label: scene.label,
                generation_prompt,
                generated_html: Some(html),
            }
        })
        .collect();

    tracing::info!(
        project_id = %project_id,
        scenes = scenes.len(),
        "animation set generated"
    );

    let now = chrono::Utc::now();
    Ok(Animation {
        id: EntityId::new_v4(),
        project_id,
        topic: structured.topic,
        total_scenes: scenes.len() as u32,
        color_accent: structured.color_accent,
        secondary_accent: structured.secondary_accent,
        source_script: script.to_string(),
        status: ArtifactStatus::Completed,
        scenes,
        created_at: now,
        updated_at: now,
    })
}

fn scene_request(
    scene: &StructuredScene,
    index: usize,
    total_scenes: u32,
    color_accent: &str,
    secondary_accent: Option<&str>,
) -> SceneHtmlRequest {
    let scene_number = index as u32 + 1;
    let generation_prompt = scene
        .generation_prompt
        .clone()
        .unwrap_or_else(|| format!("Scene {scene_number}: {}", scene.main_text));

    SceneHtmlRequest {
        generation_prompt,
        scene_number,
        total_scenes,
        color_accent: color_accent.to_string(),
        secondary_accent: secondary_accent.map(str::to_string),
        main_text: scene.main_text.clone(),
        sub_text: scene.sub_text.clone(),
        visual_type: scene.visual_type.clone(),
        visual_elements: scene.visual_elements.clone().unwrap_or_default(),
        emoji: scene.emoji.clone(),
        label: scene.label.clone(),
    }
}
