//! Read-only snapshots of a host application's histories: command line,
//! dialog inputs, editor, folder and viewer.
//!
//! The host owns the logs and registers a [`HistoryStore`]; plugin code reads
//! them through [`HistoryAccess`], either on its own [`History`] or on the
//! process-wide one from [`instance`].

mod accessor;
mod config;
mod error;
mod file_store;
mod memory;
mod storage;
mod store;

pub use accessor::{install, instance, History, HistoryAccess, SharedHistory};
pub use config::{Config, StoreConfig, DIR_ENV};
pub use error::HistoryError;
pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use storage::{HistoryCategory, HistoryRecord, HostEntry};
pub use store::HistoryStore;
