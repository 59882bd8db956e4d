/// Drafts and published forms are keyed by random (v4) UUIDs.
pub type FormId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
