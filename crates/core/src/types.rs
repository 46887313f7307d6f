/// Patient record id (`patients.id`, a `BIGSERIAL`).
pub type DbId = i64;

/// Record creation time, stored as `TIMESTAMPTZ` and handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
