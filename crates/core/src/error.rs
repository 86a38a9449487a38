use crate::types::EntityId;

/// Domain-level error taxonomy.
///
/// `GenerationFailed` deliberately carries only the artifact name: the full
/// failure detail is logged at the failure site and must not reach callers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The referenced entity does not exist. Never retried automatically.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: EntityId },

    /// Malformed input, rejected before any external call is made.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An AI structuring or HTML-generation call failed or returned
    /// malformed data.
    #[error("Failed to generate {artifact}. Please try again later.")]
    GenerationFailed { artifact: &'static str },

    /// The browser process is not running; render operations fail fast
    /// until it is restarted.
    #[error("Rendering is not available: {0}")]
    RenderingUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
