//! Shared headless-browser engine.
//!
//! One Chromium process serves the whole backend. Each render call opens a
//! fresh incognito browsing context (own cookie/storage namespace), loads
//! the HTML as a data URL, captures a viewport-clipped screenshot, and
//! disposes the context on every exit path. The blocking CDP calls run on
//! the tokio blocking pool.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use headless_chrome::browser::tab::Tab;
use headless_chrome::protocol::cdp::{Page, Target};
use headless_chrome::{Browser, LaunchOptions};

use clipforge_core::validation::validate_dimensions;

use crate::config::RenderConfig;
use crate::{overlay, HtmlRenderer, RenderError};

/// Extra settle window after navigation so web fonts finish rendering.
/// There is no reliable font-load signal over CDP; a fixed delay is the
/// accepted simplification.
const FONT_SETTLE: Duration = Duration::from_millis(2000);

/// The browser crate tears the child process down after this much idle
/// time; the engine is process-lived, so keep it generous.
const BROWSER_IDLE_TIMEOUT: Duration = Duration::from_secs(86_400);

/// Live browser handles. Dropped as a unit on shutdown.
struct Shared {
    browser: Arc<Browser>,
    /// Long-lived tab in the default context, used for browser-level CDP
    /// calls (browsing-context disposal).
    control: Arc<Tab>,
}

/// Process-wide rendering engine.
///
/// Created once at startup via [`RenderEngine::start`] and shared through
/// an `Arc`. If the browser fails to launch the engine stays permanently
/// disabled: every render call fails fast with [`RenderError::Unavailable`]
/// while the rest of the backend keeps working.
pub struct RenderEngine {
    shared: tokio::sync::RwLock<Option<Shared>>,
    /// Raw logo bytes loaded once at startup; `None` disables the overlay.
    logo: Option<Arc<Vec<u8>>>,
}

impl RenderEngine {
    /// Launch the browser and load the overlay logo.
    ///
    /// Never fails: launch and logo problems are logged and degrade the
    /// engine (disabled rendering / no overlay) instead of aborting
    /// startup.
    pub fn start(config: &RenderConfig) -> Arc<Self> {
        let shared = match launch(config) {
            Ok(shared) => {
                tracing::info!(
                    browser_path = ?config.browser_path,
                    "headless browser launched"
                );
                Some(shared)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to launch browser; rendering disabled");
                None
            }
        };

        let logo = match std::fs::read(&config.logo_path) {
            Ok(bytes) => {
                tracing::info!(path = %config.logo_path.display(), "overlay logo loaded");
                Some(Arc::new(bytes))
            }
            Err(e) => {
                tracing::warn!(
                    path = %config.logo_path.display(),
                    error = %e,
                    "overlay logo not loaded, logo overlay will be skipped"
                );
                None
            }
        };

        Arc::new(Self {
            shared: tokio::sync::RwLock::new(shared),
            logo,
        })
    }

    /// Whether render calls can currently succeed.
    pub async fn is_available(&self) -> bool {
        self.shared.read().await.is_some()
    }

    /// Whether the overlay logo was loaded.
    pub fn has_logo(&self) -> bool {
        self.logo.is_some()
    }

    /// Tear the browser down. In-flight renders keep their handles and
    /// finish; subsequent calls fail with [`RenderError::Unavailable`].
    pub async fn shutdown(&self) {
        let shared = self.shared.write().await.take();
        if shared.is_some() {
            tracing::info!("headless browser shut down");
        }
    }
}

#[async_trait]
impl HtmlRenderer for RenderEngine {
    async fn render_html_to_png(
        &self,
        html: &str,
        width: u32,
        height: u32,
        skip_logo: bool,
    ) -> Result<Vec<u8>, RenderError> {
        validate_dimensions(width, height)
            .map_err(|e| RenderError::InvalidDimensions(e.to_string()))?;

        let (browser, control) = {
            let guard = self.shared.read().await;
            match guard.as_ref() {
                Some(shared) => (Arc::clone(&shared.browser), Arc::clone(&shared.control)),
                None => return Err(RenderError::Unavailable),
            }
        };

        let logo = if skip_logo { None } else { self.logo.clone() };
        let html = html.to_string();

        tokio::task::spawn_blocking(move || {
            render_in_browser(
                &browser,
                &control,
                &html,
                width,
                height,
                logo.as_ref().map(|l| l.as_slice()),
            )
        })
        .await
        .map_err(|e| RenderError::Browser(format!("render task aborted: {e}")))?
    }
}

/// Launch the browser and open the control tab.
fn launch(config: &RenderConfig) -> Result<Shared, RenderError> {
    let mut builder = LaunchOptions::default_builder();
    builder.headless(true);
    builder.idle_browser_timeout(BROWSER_IDLE_TIMEOUT);
    builder.path(config.browser_path.clone());
    let options = builder
        .build()
        .map_err(|e| RenderError::Browser(format!("failed to build launch options: {e}")))?;

    let browser = Browser::new(options)
        .map_err(|e| RenderError::Browser(format!("failed to launch browser: {e}")))?;
    let control = browser
        .new_tab()
        .map_err(|e| RenderError::Browser(format!("failed to open control tab: {e}")))?;

    Ok(Shared {
        browser: Arc::new(browser),
        control,
    })
}

/// Render one HTML document in a fresh incognito context.
///
/// The context is disposed on every exit path -- contexts must not leak
/// across calls.
fn render_in_browser(
    browser: &Browser,
    control: &Tab,
    html: &str,
    width: u32,
    height: u32,
    logo: Option<&[u8]>,
) -> Result<Vec<u8>, RenderError> {
    let context = browser
        .new_context()
        .map_err(|e| RenderError::Browser(format!("failed to create browsing context: {e}")))?;
    let context_id = context.get_id().to_string();

    let result = capture_page(&context, html, width, height);

    if let Err(e) = control.call_method(Target::DisposeBrowserContext {
        browser_context_id: context_id,
    }) {
        tracing::warn!(error = %e, "failed to dispose browsing context");
    }

    let screenshot = result?;
    match logo {
        Some(logo) => overlay::overlay_circular_logo(&screenshot, logo),
        None => Ok(screenshot),
    }
}

fn capture_page(
    context: &headless_chrome::browser::context::Context<'_>,
    html: &str,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, RenderError> {
    let tab = context
        .new_tab()
        .map_err(|e| RenderError::Browser(format!("failed to open page: {e}")))?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(html);
    tab.navigate_to(&format!("data:text/html;base64,{encoded}"))
        .map_err(|e| RenderError::Browser(format!("navigation failed: {e}")))?;
    tab.wait_until_navigated()
        .map_err(|e| RenderError::Browser(format!("navigation did not settle: {e}")))?;

    std::thread::sleep(FONT_SETTLE);

    // Clip to the requested canvas so the PNG is exactly width x height,
    // viewport only -- never the full scrollable page.
    let clip = Page::Viewport {
        x: 0.0,
        y: 0.0,
        width: f64::from(width),
        height: f64::from(height),
        scale: 1.0,
    };
    tab.capture_screenshot(
        Page::CaptureScreenshotFormatOption::Png,
        None,
        Some(clip),
        true,
    )
    .map_err(|e| RenderError::Browser(format!("screenshot failed: {e}")))
}
