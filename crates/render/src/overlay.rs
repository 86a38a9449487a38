//! Circular logo overlay compositing.
//!
//! Pure image work with no browser dependency: resize the logo to a fixed
//! square with cover-fit cropping, mask it to a circle, and alpha-composite
//! it near the bottom-left corner of the base frame.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::RenderError;

/// Edge length of the composited logo in pixels.
pub const LOGO_SIZE: u32 = 256;
/// Margin between the logo and the bottom-left corner.
pub const LOGO_MARGIN: u32 = 30;

/// Composite a circular-masked logo onto `base_png` at
/// `(LOGO_MARGIN, height - LOGO_SIZE - LOGO_MARGIN)`.
///
/// Frames too small to fit the logo are returned unchanged. Output stays
/// PNG at the base frame's dimensions.
pub fn overlay_circular_logo(base_png: &[u8], logo: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut base = decode(base_png)?.to_rgba8();
    let (width, height) = base.dimensions();

    if width < LOGO_SIZE + LOGO_MARGIN || height < LOGO_SIZE + LOGO_MARGIN {
        tracing::warn!(width, height, "frame too small for logo overlay, skipping");
        return Ok(base_png.to_vec());
    }

    let circular = circular_logo(logo)?;
    let x = i64::from(LOGO_MARGIN);
    let y = i64::from(height - LOGO_SIZE - LOGO_MARGIN);
    image::imageops::overlay(&mut base, &circular, x, y);

    encode_png(base)
}

/// Resize the logo to `LOGO_SIZE` square (cover-fit, cropping overflow) and
/// zero the alpha of every pixel outside the inscribed circle.
fn circular_logo(logo: &[u8]) -> Result<RgbaImage, RenderError> {
    let mut resized = decode(logo)?
        .resize_to_fill(LOGO_SIZE, LOGO_SIZE, FilterType::Lanczos3)
        .to_rgba8();

    let center = LOGO_SIZE as f32 / 2.0;
    let radius_sq = center * center;
    for (x, y, pixel) in resized.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        if dx * dx + dy * dy > radius_sq {
            pixel.0[3] = 0;
        }
    }

    Ok(resized)
}

fn decode(bytes: &[u8]) -> Result<DynamicImage, RenderError> {
    image::load_from_memory(bytes).map_err(|e| RenderError::Image(e.to_string()))
}

fn encode_png(buffer: RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut out = Vec::new();
    DynamicImage::ImageRgba8(buffer)
        .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
        .map_err(|e| RenderError::Image(e.to_string()))?;
    Ok(out)
}
