use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::HistoryError;

/// One entry of a history log, detached from the host.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub name: String,                // Command text, visited path, or viewed file
    #[serde(default)]
    pub time: Option<DateTime<Utc>>, // Last time the host touched this entry, if recorded
    #[serde(default)]
    pub locked: bool,                // Pinned by the user on the host side
}

/// Entry as the host keeps it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub name: String,
    #[serde(default)]
    pub time_ms: Option<i64>, // Unix epoch milliseconds; absent when the host kept no time
    #[serde(default)]
    pub locked: bool,
}

impl HostEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time_ms: None,
            locked: false,
        }
    }

    pub fn at(mut self, time_ms: i64) -> Self {
        self.time_ms = Some(time_ms);
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}

impl HistoryRecord {
    /// Copies a host entry into an owned record.
    ///
    /// A timestamp chrono cannot represent means the host store is corrupted.
    pub fn from_host(entry: &HostEntry) -> Result<Self, HistoryError> {
        let time = match entry.time_ms {
            Some(ms) => Some(Utc.timestamp_millis_opt(ms).single().ok_or_else(|| {
                HistoryError::unavailable(format!(
                    "entry {:?} has invalid timestamp {}",
                    entry.name, ms
                ))
            })?),
            None => None,
        };

        Ok(Self {
            name: entry.name.clone(),
            time,
            locked: entry.locked,
        })
    }
}

/// Which host log to read. Dialog logs are keyed by the dialog's history name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HistoryCategory {
    Command,
    Dialog(String),
    Editor,
    Folder,
    Viewer,
}

impl HistoryCategory {
    pub fn dialog(name: impl Into<String>) -> Self {
        HistoryCategory::Dialog(name.into())
    }

    /// The four logs that exist once per host.
    pub const SINGLETONS: [HistoryCategory; 4] = [
        HistoryCategory::Command,
        HistoryCategory::Editor,
        HistoryCategory::Folder,
        HistoryCategory::Viewer,
    ];
}

impl fmt::Display for HistoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryCategory::Command => f.write_str("command"),
            HistoryCategory::Dialog(name) => write!(f, "dialog:{}", name),
            HistoryCategory::Editor => f.write_str("editor"),
            HistoryCategory::Folder => f.write_str("folder"),
            HistoryCategory::Viewer => f.write_str("viewer"),
        }
    }
}
