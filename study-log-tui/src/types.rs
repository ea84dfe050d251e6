use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A study log row as stored in the remote `study-logs` table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StudyLogEntry {
    pub id: i64,
    pub title: String,
    pub hours: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Payload for creating or updating a study log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudyLogInput {
    pub title: String,
    pub hours: i32,
}

impl StudyLogInput {
    pub fn new(title: impl Into<String>, hours: i32) -> Self {
        Self {
            title: title.into(),
            hours,
        }
    }
}
