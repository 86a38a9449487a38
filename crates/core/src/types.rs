/// All entity primary keys are UUIDv4, assigned by the core at creation time.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Accent color used for previews when the project has no carousel to
/// inherit one from.
pub const DEFAULT_COLOR_ACCENT: &str = "#FF5733";
