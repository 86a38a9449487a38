//! HTML-to-PNG rendering engine.
//!
//! Owns a single headless Chromium process shared by the whole backend.
//! Every render call gets its own incognito browsing context; the browser
//! process is the only shared resource. A fixed circular logo can be
//! composited onto each captured frame.

pub mod config;
pub mod engine;
pub mod overlay;

use async_trait::async_trait;

pub use config::RenderConfig;
pub use engine::RenderEngine;

/// Errors from the rendering engine.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The browser process failed to start or has been shut down. All
    /// render calls fail fast with this error until the process restarts.
    #[error("browser process is not available")]
    Unavailable,

    /// Render dimensions outside the supported range, rejected before any
    /// browser interaction.
    #[error("invalid render dimensions: {0}")]
    InvalidDimensions(String),

    /// A browser-control (CDP) operation failed.
    #[error("browser error: {0}")]
    Browser(String),

    /// Decoding or encoding an image buffer failed.
    #[error("image error: {0}")]
    Image(String),
}

/// Render seam used by the export pipeline and the HTTP layer.
///
/// Implementations must be safe for concurrent calls and must not leak
/// per-call browser state across invocations.
#[async_trait]
pub trait HtmlRenderer: Send + Sync {
    /// Render an HTML document to PNG bytes at exactly `width x height`
    /// pixels, optionally skipping the logo overlay.
    async fn render_html_to_png(
        &self,
        html: &str,
        width: u32,
        height: u32,
        skip_logo: bool,
    ) -> Result<Vec<u8>, RenderError>;
}
