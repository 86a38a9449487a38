//! Carousel generation.

use clipforge_ai::types::{SlideHtmlRequest, StructuredSlide};
use clipforge_ai::Structurer;
use clipforge_core::error::CoreError;
use clipforge_core::model::{ArtifactStatus, Carousel, Slide, SlideKind};
use clipforge_core::types::EntityId;

use super::{generation_failed, join_indexed};

pub const CAROUSEL_PLATFORM: &str = "Instagram";
pub const CAROUSEL_CANVAS: &str = "1080x1350";
pub const CAROUSEL_RATIO: &str = "4:5";
pub const CAROUSEL_WIDTH: u32 = 1080;
pub const CAROUSEL_HEIGHT: u32 = 1350;

/// Structure a carousel from the script and generate one HTML fragment per
/// slide, concurrently.
pub async fn generate_carousel(
    structurer: &dyn Structurer,
    project_id: EntityId,
    script: &str,
) -> Result<Carousel, CoreError> {
    let structured = structurer
        .structure_carousel(script, CAROUSEL_PLATFORM, CAROUSEL_CANVAS, CAROUSEL_RATIO)
        .await
        .map_err(|e| generation_failed("carousel", e))?;

    if structured.slides.is_empty() {
        tracing::error!("structuring returned a carousel with no slides");
        return Err(CoreError::GenerationFailed {
            artifact: "carousel",
        });
    }

    let requests: Vec<SlideHtmlRequest> = structured
        .slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            slide_request(
                slide,
                index,
                structured.slides.len() as u32,
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
                .generate_slide_html(request)
                .await
                .map(|html| (index, html))
        })
        .collect();
    let html_by_index = join_indexed(tasks)
        .await
        .map_err(|e| generation_failed("carousel", e))?;

    let slides: Vec<Slide> = structured
        .slides
        .into_iter()
        .zip(html_by_index)
        .enumerate()
        .map(|(index, (slide, html))| {
            let slide_number = index as u32 + 1;
            let generation_prompt = format!("Slide {slide_number}: {}", slide.main_text);
            Slide {
                id: EntityId::new_v4(),
                slide_number,
                slide_type: SlideKind::from_label(&slide.slide_type),
                main_text: slide.main_text,
                highlight_text: slide.highlight_text,
                sub_text: slide.sub_text,
                data_visual: slide.data_visual,
                emoji: slide.emoji,
                label: slide.label,
                generation_prompt,
                generated_html: Some(html),
            }
        })
        .collect();

    tracing::info!(
        project_id = %project_id,
        slides = slides.len(),
        "carousel generated"
    );

    let now = chrono::Utc::now();
    Ok(Carousel {
        id: EntityId::new_v4(),
        project_id,
        topic: structured.topic,
        total_slides: slides.len() as u32,
        color_accent: structured.color_accent,
        secondary_accent: structured.secondary_accent,
        platform: CAROUSEL_PLATFORM.to_string(),
        canvas: CAROUSEL_CANVAS.to_string(),
        ratio: CAROUSEL_RATIO.to_string(),
        source_script: script.to_string(),
        status: ArtifactStatus::Completed,
        slides,
        created_at: now,
        updated_at: now,
    })
}

fn slide_request(
    slide: &StructuredSlide,
    index: usize,
    total_slides: u32,
    color_accent: &str,
    secondary_accent: Option<&str>,
) -> SlideHtmlRequest {
    let slide_number = index as u32 + 1;
    let generation_prompt = slide
        .generation_prompt
        .clone()
        .unwrap_or_else(|| format!("Slide {slide_number}: {}", slide.main_text));

    SlideHtmlRequest {
        generation_prompt,
        slide_number,
        total_slides,
        width: CAROUSEL_WIDTH,
        height: CAROUSEL_HEIGHT,
        color_accent: color_accent.to_string(),
        secondary_accent: secondary_accent.map(str::to_string),
        main_text: slide.main_text.clone(),
        highlight_text: slide.highlight_text.clone(),
        sub_text: slide.sub_text.clone(),
        data_visual: slide.data_visual.clone(),
        emoji: slide.emoji.clone(),
        label: slide.label.clone(),
    }
}
