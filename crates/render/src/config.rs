use std::path::PathBuf;

/// Rendering engine configuration loaded from environment variables.
///
/// Both settings degrade gracefully: a missing browser leaves the engine
/// disabled (render calls fail fast), a missing logo skips the overlay.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Path to a Chromium executable. `None` lets the browser crate locate
    /// an installed one.
    pub browser_path: Option<PathBuf>,
    /// Path to the overlay logo image.
    pub logo_path: PathBuf,
}

/// Default overlay logo location, relative to the working directory.
pub const DEFAULT_LOGO_PATH: &str = "profile.jpeg";

impl RenderConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                    | Default        |
    /// |----------------------------|----------------|
    /// | `CHROMIUM_EXECUTABLE_PATH` | (auto-detect)  |
    /// | `PROFILE_LOGO_PATH`        | `profile.jpeg` |
    pub fn from_env() -> Self {
        let browser_path = std::env::var("CHROMIUM_EXECUTABLE_PATH")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let logo_path = std::env::var("PROFILE_LOGO_PATH")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOGO_PATH));

        Self {
            browser_path,
            logo_path,
        }
    }
}
