//! In-process host store.
//!
//! Hosts that keep their histories in memory register a `MemoryStore` and
//! append to it as the user acts; readers only ever get clones.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockWriteGuard};

use crate::error::HistoryError;
use crate::storage::{HistoryCategory, HostEntry};
use crate::store::HistoryStore;

type Logs = HashMap<HistoryCategory, Vec<HostEntry>>;

#[derive(Debug, Default)]
pub struct MemoryStore {
    logs: RwLock<Logs>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `set`.
    pub fn with_log<I>(self, category: HistoryCategory, entries: I) -> Self
    where
        I: IntoIterator<Item = HostEntry>,
    {
        // Owned `self` has no concurrent writers, so a poisoned map is still usable.
        self.logs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(category, entries.into_iter().collect());
        self
    }

    pub fn push(&self, category: HistoryCategory, entry: HostEntry) -> Result<(), HistoryError> {
        self.write()?.entry(category).or_default().push(entry);
        Ok(())
    }

    /// Replaces a whole log, creating it if needed.
    pub fn set<I>(&self, category: HistoryCategory, entries: I) -> Result<(), HistoryError>
    where
        I: IntoIterator<Item = HostEntry>,
    {
        self.write()?.insert(category, entries.into_iter().collect());
        Ok(())
    }

    /// Drops a log entirely; reads of it become empty.
    pub fn clear(&self, category: &HistoryCategory) -> Result<(), HistoryError> {
        self.write()?.remove(category);
        Ok(())
    }

    /// Marks the host as going away. Reads fail until `reopen`.
    pub fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn reopen(&self) {
        self.closed.store(false, Ordering::SeqCst);
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Logs>, HistoryError> {
        self.logs
            .write()
            .map_err(|_| HistoryError::unavailable("history lock poisoned"))
    }
}

impl HistoryStore for MemoryStore {
    fn entries(&self, category: &HistoryCategory) -> Result<Option<Vec<HostEntry>>, HistoryError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(HistoryError::unavailable("history host is shut down"));
        }

        let logs = self
            .logs
            .read()
            .map_err(|_| HistoryError::unavailable("history lock poisoned"))?;

        Ok(logs.get(category).cloned())
    }
}
