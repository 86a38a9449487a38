//! Input validation helpers.
//!
//! These run before any external call is made: a request that fails here
//! never reaches the structuring service or the browser.

use crate::error::CoreError;

/// Smallest accepted canvas edge in pixels.
pub const MIN_RENDER_DIMENSION: u32 = 16;
/// Largest accepted canvas edge in pixels.
pub const MAX_RENDER_DIMENSION: u32 = 8192;

/// Reject blank source scripts.
pub fn validate_script(script: &str) -> Result<(), CoreError> {
    if script.trim().is_empty() {
        return Err(CoreError::Validation(
            "script must not be blank".to_string(),
        ));
    }
    Ok(())
}

/// Reject render dimensions outside the supported range.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), CoreError> {
    for (name, value) in [("width", width), ("height", height)] {
        if !(MIN_RENDER_DIMENSION..=MAX_RENDER_DIMENSION).contains(&value) {
            return Err(CoreError::Validation(format!(
                "{name} {value} is out of range \
                 ({MIN_RENDER_DIMENSION}..={MAX_RENDER_DIMENSION})"
            )));
        }
    }
    Ok(())
}
