//! Zip export of rendered artifact PNGs.
//!
//! Gathers every generated HTML fragment of a project with its declared
//! dimensions, renders each through the [`HtmlRenderer`] seam, and writes
//! the PNGs into a zip archive grouped by artifact type:
//!
//! ```text
//! animations/scene-<n>.png
//! carousel/slide-<n>.png
//! previews/<platform>.png
//! ```
//!
//! A single render failure fails the whole export -- the archive must
//! exactly match the set of HTML fragments that existed at request time.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use clipforge_core::error::CoreError;
use clipforge_core::model::ProjectRecord;
use clipforge_render::{HtmlRenderer, RenderError};

use crate::generate::{CAROUSEL_HEIGHT, CAROUSEL_WIDTH, SCENE_FRAME_HEIGHT, SCENE_FRAME_WIDTH};

/// One renderable archive entry.
#[derive(Debug)]
struct RenderItem {
    path: String,
    html: String,
    width: u32,
    height: u32,
}

/// Render every fragment and pack the PNGs into an archive.
pub async fn build_archive(
    record: &ProjectRecord,
    renderer: &dyn HtmlRenderer,
) -> Result<Vec<u8>, CoreError> {
    let items = collect_render_items(record);
    tracing::info!(
        project_id = %record.project.id,
        items = items.len(),
        "rendering export archive"
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    // PNG payloads are already compressed.
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for item in &items {
        let png = renderer
            .render_html_to_png(&item.html, item.width, item.height, false)
            .await
            .map_err(render_failed)?;
        writer
            .start_file(item.path.as_str(), options)
            .map_err(zip_failed)?;
        writer
            .write_all(&png)
            .map_err(|e| CoreError::Internal(format!("zip write failed: {e}")))?;
    }

    let cursor = writer.finish().map_err(zip_failed)?;
    Ok(cursor.into_inner())
}

/// Collect archive entries in a stable order: animations, then carousel
/// slides, then previews. Fragments without generated HTML have nothing to
/// render and are not listed.
fn collect_render_items(record: &ProjectRecord) -> Vec<RenderItem> {
    let mut items = Vec::new();

    for animation in &record.animations {
        for scene in &animation.scenes {
            if let Some(html) = &scene.generated_html {
                items.push(RenderItem {
                    path: format!("animations/scene-{}.png", scene.scene_number),
                    html: html.clone(),
                    width: SCENE_FRAME_WIDTH,
                    height: SCENE_FRAME_HEIGHT,
                });
            }
        }
    }

    for carousel in &record.carousels {
        let (width, height) =
            parse_canvas(&carousel.canvas).unwrap_or((CAROUSEL_WIDTH, CAROUSEL_HEIGHT));
        for slide in &carousel.slides {
            if let Some(html) = &slide.generated_html {
                items.push(RenderItem {
                    path: format!("carousel/slide-{}.png", slide.slide_number),
                    html: html.clone(),
                    width,
                    height,
                });
            }
        }
    }

    for preview in &record.previews {
        if let Some(html) = &preview.generated_html {
            items.push(RenderItem {
                path: format!("previews/{}.png", preview.platform.as_str()),
                html: html.clone(),
                width: preview.width,
                height: preview.height,
            });
        }
    }

    items
}

/// Parse a `<width>x<height>` canvas descriptor.
fn parse_canvas(canvas: &str) -> Option<(u32, u32)> {
    let (width, height) = canvas.split_once('x')?;
    Some((width.trim().parse().ok()?, height.trim().parse().ok()?))
}

fn render_failed(error: RenderError) -> CoreError {
    match error {
        RenderError::Unavailable => {
            CoreError::RenderingUnavailable("browser process is not running".to_string())
        }
        other => {
            tracing::error!(error = %other, "export rendering failed");
            CoreError::Internal(format!("export rendering failed: {other}"))
        }
    }
}

fn zip_failed(error: zip::result::ZipError) -> CoreError {
    CoreError::Internal(format!("zip archive failed: {error}"))
}
