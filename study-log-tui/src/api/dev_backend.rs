use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use time::OffsetDateTime;

use crate::api::{RemoteError, StudyLogGateway};
use crate::types::{StudyLogEntry, StudyLogInput};

/// In-memory stand-in for the remote table, used by `dev` mode and tests.
#[derive(Debug, Clone)]
pub struct DevBackend {
    store: Arc<Mutex<Vec<StudyLogEntry>>>,
}

impl Default for DevBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DevBackend {
    pub fn new() -> Self {
        Self::with_entries(seed_dev_logs())
    }

    pub fn with_entries(entries: Vec<StudyLogEntry>) -> Self {
        Self {
            store: Arc::new(Mutex::new(entries)),
        }
    }

    /// Current rows, bypassing the gateway interface.
    #[cfg(test)]
    pub fn rows(&self) -> Vec<StudyLogEntry> {
        self.store.lock().map(|rows| rows.clone()).unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<StudyLogEntry>>, RemoteError> {
        self.store
            .lock()
            .map_err(|_| RemoteError::unknown("dev store lock poisoned"))
    }
}

#[async_trait]
impl StudyLogGateway for DevBackend {
    async fn list_all(&self) -> Result<Vec<StudyLogEntry>, RemoteError> {
        Ok(self.lock()?.clone())
    }

    async fn create(&self, input: &StudyLogInput) -> Result<StudyLogEntry, RemoteError> {
        let mut rows = self.lock()?;
        let next_id = rows.iter().map(|row| row.id).max().unwrap_or(0) + 1;
        let row = StudyLogEntry {
            id: next_id,
            title: input.title.clone(),
            hours: input.hours,
            created_at: OffsetDateTime::now_utc(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, input: &StudyLogInput) -> Result<(), RemoteError> {
        if let Some(row) = self.lock()?.iter_mut().find(|row| row.id == id) {
            row.title = input.title.clone();
            row.hours = input.hours;
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RemoteError> {
        self.lock()?.retain(|row| row.id != id);
        Ok(())
    }
}

fn seed_dev_logs() -> Vec<StudyLogEntry> {
    let now = OffsetDateTime::now_utc();
    let entry = |id: i64, title: &str, hours: i32, days_ago: i64| StudyLogEntry {
        id,
        title: title.to_string(),
        hours,
        created_at: now - time::Duration::days(days_ago),
    };

    vec![
        entry(1, "Rust ownership", 3, 6),
        entry(2, "Linear algebra", 2, 4),
        entry(3, "Japanese reading", 1, 2),
        entry(4, "Async Rust", 4, 1),
    ]
}
