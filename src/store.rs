use std::sync::Arc;

use crate::error::HistoryError;
use crate::storage::{HistoryCategory, HostEntry};

/// Read side of the host's history subsystem.
///
/// `Ok(None)` means the host keeps no log for `category`, which callers see
/// as an empty history. Entries come back in the host's own order.
/// Implementations do their own synchronization; readers hold no locks
/// across calls.
pub trait HistoryStore: Send + Sync {
    fn entries(&self, category: &HistoryCategory) -> Result<Option<Vec<HostEntry>>, HistoryError>;
}

impl<T: HistoryStore + ?Sized> HistoryStore for &T {
    fn entries(&self, category: &HistoryCategory) -> Result<Option<Vec<HostEntry>>, HistoryError> {
        (**self).entries(category)
    }
}

impl<T: HistoryStore + ?Sized> HistoryStore for Box<T> {
    fn entries(&self, category: &HistoryCategory) -> Result<Option<Vec<HostEntry>>, HistoryError> {
        (**self).entries(category)
    }
}

impl<T: HistoryStore + ?Sized> HistoryStore for Arc<T> {
    fn entries(&self, category: &HistoryCategory) -> Result<Option<Vec<HostEntry>>, HistoryError> {
        (**self).entries(category)
    }
}
