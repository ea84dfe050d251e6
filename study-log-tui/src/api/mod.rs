use async_trait::async_trait;
use thiserror::Error;

use crate::types::{StudyLogEntry, StudyLogInput};

mod client;
mod dev_backend;
mod dto;

pub use client::RestGateway;
pub use dev_backend::DevBackend;

/// Remote table holding the study logs.
pub const STUDY_LOGS_TABLE: &str = "study-logs";

/// Any failure talking to the remote store.
///
/// Callers treat every variant the same way; the variants only exist so the
/// log says what actually went wrong.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request to {call} failed: {source}")]
    Transport {
        call: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{call} returned {status}: {message}")]
    Status {
        call: &'static str,
        status: u16,
        message: String,
    },
    #[error("failed to decode {call} response: {source}")]
    Decode {
        call: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid store configuration: {0}")]
    Config(String),
    #[error("{0}")]
    Unknown(String),
}

impl RemoteError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::Unknown(msg.into())
    }
}

/// Boundary to the remote `study-logs` collection.
///
/// Every call is a single request: no retries, no timeouts, no cancellation.
/// `update` and `delete` succeed without effect when no row has the given id.
#[async_trait]
pub trait StudyLogGateway: Send + Sync {
    /// Fetch every row. Order is whatever the store returns.
    async fn list_all(&self) -> Result<Vec<StudyLogEntry>, RemoteError>;

    /// Insert one row and return it with its server-assigned id and timestamp.
    async fn create(&self, input: &StudyLogInput) -> Result<StudyLogEntry, RemoteError>;

    async fn update(&self, id: i64, input: &StudyLogInput) -> Result<(), RemoteError>;

    async fn delete(&self, id: i64) -> Result<(), RemoteError>;
}

#[async_trait]
impl<G: StudyLogGateway + ?Sized> StudyLogGateway for Box<G> {
    async fn list_all(&self) -> Result<Vec<StudyLogEntry>, RemoteError> {
        (**self).list_all().await
    }

    async fn create(&self, input: &StudyLogInput) -> Result<StudyLogEntry, RemoteError> {
        (**self).create(input).await
    }

    async fn update(&self, id: i64, input: &StudyLogInput) -> Result<(), RemoteError> {
        (**self).update(id, input).await
    }

    async fn delete(&self, id: i64) -> Result<(), RemoteError> {
        (**self).delete(id).await
    }
}
