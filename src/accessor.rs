use std::sync::{Arc, OnceLock};

use crate::error::HistoryError;
use crate::storage::{HistoryCategory, HistoryRecord};
use crate::store::HistoryStore;

/// The five history reads offered to plugin code.
///
/// Every call returns a fresh snapshot in the host's order. An empty vector
/// means "no history yet"; `HostUnavailable` means the host could not be read.
pub trait HistoryAccess {
    fn read(&self, category: &HistoryCategory) -> Result<Vec<HistoryRecord>, HistoryError>;

    /// Command line history.
    fn command(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        self.read(&HistoryCategory::Command)
    }

    /// History of the dialog input registered under `name`. Unknown names
    /// yield an empty vector.
    fn dialog(&self, name: &str) -> Result<Vec<HistoryRecord>, HistoryError> {
        self.read(&HistoryCategory::dialog(name))
    }

    /// Files opened in the editor.
    fn editor(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        self.read(&HistoryCategory::Editor)
    }

    /// Folder navigation history.
    fn folder(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        self.read(&HistoryCategory::Folder)
    }

    /// Files opened in the viewer.
    fn viewer(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        self.read(&HistoryCategory::Viewer)
    }
}

/// Stateless reader over a host store.
#[derive(Debug, Clone)]
pub struct History<S> {
    store: S,
}

impl<S: HistoryStore> History<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: HistoryStore> HistoryAccess for History<S> {
    fn read(&self, category: &HistoryCategory) -> Result<Vec<HistoryRecord>, HistoryError> {
        let entries = match self.store.entries(category) {
            Ok(Some(entries)) => entries,
            Ok(None) => return Ok(Vec::new()),
            Err(err) => {
                tracing::warn!(%category, %err, "history read failed");
                return Err(err);
            }
        };

        let records = entries
            .iter()
            .map(HistoryRecord::from_host)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(%category, count = records.len(), "history snapshot");
        Ok(records)
    }
}

pub type SharedHistory = History<Arc<dyn HistoryStore>>;

static INSTANCE: OnceLock<SharedHistory> = OnceLock::new();

/// Registers the host's store as the process-wide history. Done once by the
/// host during startup.
pub fn install(store: Arc<dyn HistoryStore>) -> Result<&'static SharedHistory, HistoryError> {
    let mut won = false;
    let installed = INSTANCE.get_or_init(|| {
        won = true;
        History::new(store)
    });

    if !won {
        return Err(HistoryError::AlreadyInstalled);
    }

    tracing::debug!("history host installed");
    Ok(installed)
}

/// The process-wide history, or `HostUnavailable` before a host installed one.
pub fn instance() -> Result<&'static SharedHistory, HistoryError> {
    INSTANCE
        .get()
        .ok_or_else(|| HistoryError::unavailable("no history host installed"))
}
