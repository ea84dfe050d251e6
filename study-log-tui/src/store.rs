use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::{RemoteError, StudyLogGateway};
use crate::types::{StudyLogEntry, StudyLogInput};

/// Shared view of the store's in-flight flag.
///
/// The event loop keeps a clone so it can draw the throbber while the store
/// itself is mutably borrowed by a running operation.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn get(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn set(&self, value: bool) {
        self.0.store(value, Ordering::SeqCst);
    }
}

/// Owns the local snapshot of the remote study logs.
///
/// Every mutation is followed by a full reload, so `entries` is always exactly
/// what the last successful `list_all` returned. Nothing is patched locally.
pub struct StudyLogStore<G> {
    gateway: G,
    entries: Vec<StudyLogEntry>,
    loading: LoadingFlag,
    activated: bool,
}

impl<G: StudyLogGateway> StudyLogStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            entries: Vec::new(),
            loading: LoadingFlag::default(),
            activated: false,
        }
    }

    pub fn entries(&self) -> &[StudyLogEntry] {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    pub fn total_hours(&self) -> i64 {
        self.entries.iter().map(|entry| i64::from(entry.hours)).sum()
    }

    /// Initial load. Only the first call reaches the gateway.
    pub async fn activate(&mut self) -> Result<(), RemoteError> {
        if self.activated {
            return Ok(());
        }
        self.activated = true;
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> Result<(), RemoteError> {
        self.loading.set(true);
        let result = self.reload().await;
        self.loading.set(false);
        result
    }

    pub async fn create(&mut self, input: &StudyLogInput) -> Result<(), RemoteError> {
        self.loading.set(true);
        let result = match self.gateway.create(input).await {
            Ok(created) => {
                debug!(id = created.id, "study log created");
                self.refresh().await
            }
            Err(e) => Err(e),
        };
        self.loading.set(false);
        result
    }

    pub async fn remove(&mut self, id: i64) -> Result<(), RemoteError> {
        self.loading.set(true);
        let result = match self.gateway.delete(id).await {
            Ok(()) => self.refresh().await,
            Err(e) => Err(e),
        };
        self.loading.set(false);
        result
    }

    pub async fn edit(&mut self, id: i64, input: &StudyLogInput) -> Result<(), RemoteError> {
        self.loading.set(true);
        let result = match self.gateway.update(id, input).await {
            Ok(()) => self.refresh().await,
            Err(e) => Err(e),
        };
        self.loading.set(false);
        result
    }

    async fn reload(&mut self) -> Result<(), RemoteError> {
        let entries = self.gateway.list_all().await?;
        info!(count = entries.len(), "study logs reloaded");
        self.entries = entries;
        Ok(())
    }
}
