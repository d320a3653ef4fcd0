/// All database primary keys are UUIDs. The path codec relies on their
/// fixed 36-character string form.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
