use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::HistoryError;
use crate::storage::{HistoryCategory, HostEntry};
use crate::store::HistoryStore;

/// Read-only view of a history directory the host persists as JSON.
///
/// ```text
/// <dir>/command.json
/// <dir>/editor.json
/// <dir>/folder.json
/// <dir>/viewer.json
/// <dir>/dialog/<name>.json
/// ```
///
/// Each file holds a JSON array of host entries in host order. Nothing here
/// creates or rewrites those files.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let base_dir = dir.into();

        if !base_dir.is_dir() {
            return Err(HistoryError::unavailable(format!(
                "history directory {} not found",
                base_dir.display()
            )));
        }

        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// File backing `category`, or `None` when the category cannot name a
    /// file inside the store (e.g. a dialog name containing a separator).
    fn log_path(&self, category: &HistoryCategory) -> Option<PathBuf> {
        let path = match category {
            HistoryCategory::Command => self.base_dir.join("command.json"),
            HistoryCategory::Editor => self.base_dir.join("editor.json"),
            HistoryCategory::Folder => self.base_dir.join("folder.json"),
            HistoryCategory::Viewer => self.base_dir.join("viewer.json"),
            HistoryCategory::Dialog(name) => {
                if !is_plain_name(name) {
                    return None;
                }
                self.base_dir.join("dialog").join(format!("{}.json", name))
            }
        };
        Some(path)
    }
}

/// True when `name` is exactly one ordinary file name on every platform, so
/// joining it can neither leave the dialog directory nor replace it
/// (`C:x` is a drive-relative path on Windows).
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\', ':', '\0'])
}

impl HistoryStore for FileStore {
    fn entries(&self, category: &HistoryCategory) -> Result<Option<Vec<HostEntry>>, HistoryError> {
        let Some(path) = self.log_path(category) else {
            tracing::debug!(%category, "dialog name does not map to a log file");
            return Ok(None);
        };

        // Whole-file read so one call never mixes two host writes.
        let content = match fs::read(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                if !self.base_dir.is_dir() {
                    return Err(HistoryError::unavailable(format!(
                        "history directory {} is gone",
                        self.base_dir.display()
                    )));
                }
                return Ok(None);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to read history log");
                return Err(HistoryError::unavailable(format!(
                    "failed to read {}: {}",
                    path.display(),
                    err
                )));
            }
        };

        let entries: Vec<HostEntry> = serde_json::from_slice(&content).map_err(|err| {
            tracing::warn!(path = %path.display(), %err, "history log is corrupted");
            HistoryError::from(err)
        })?;

        Ok(Some(entries))
    }
}
