use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::file_store::FileStore;

/// Environment variable that overrides `store.dir`.
pub const DIR_ENV: &str = "HOST_HISTORY_DIR";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct StoreConfig {
    // Directory holding the host's history files; defaults to ~/.host-history/history
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Loads `~/.host-history/config.toml`, or defaults when there is none.
    /// The file is never created.
    pub fn new() -> Result<Self> {
        Self::from_path(&Self::get_config_path())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    fn get_config_path() -> PathBuf {
        base_dir().join("config.toml")
    }

    /// `HOST_HISTORY_DIR` wins over the config file, which wins over the default.
    pub fn effective_dir(&self) -> PathBuf {
        self.effective_dir_with(std::env::var_os(DIR_ENV).map(PathBuf::from))
    }

    fn effective_dir_with(&self, env_dir: Option<PathBuf>) -> PathBuf {
        env_dir
            .filter(|dir| !dir.as_os_str().is_empty())
            .or_else(|| self.store.dir.clone())
            .unwrap_or_else(|| base_dir().join("history"))
    }

    pub fn open_store(&self) -> Result<FileStore> {
        let dir = self.effective_dir();
        FileStore::open(&dir)
            .with_context(|| format!("cannot open history store at {}", dir.display()))
    }
}

fn base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".host-history")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() -> Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("config.toml");

        let config = Config::from_path(&path)?;
        assert!(config.store.dir.is_none());
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn reads_store_dir() -> Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[store]\ndir = \"/srv/far/history\"\n")?;

        let config = Config::from_path(&path)?;
        assert_eq!(config.store.dir, Some(PathBuf::from("/srv/far/history")));
        Ok(())
    }

    #[test]
    fn bad_toml_is_an_error() -> Result<()> {
        let tmp = TempDir::new()?;
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[store\n")?;

        assert!(Config::from_path(&path).is_err());
        Ok(())
    }

    #[test]
    fn env_dir_overrides_config() {
        let config = Config {
            store: StoreConfig {
                dir: Some(PathBuf::from("/from/config")),
            },
        };

        assert_eq!(
            config.effective_dir_with(Some(PathBuf::from("/from/env"))),
            PathBuf::from("/from/env")
        );
        assert_eq!(config.effective_dir_with(Some(PathBuf::new())), PathBuf::from("/from/config"));
        assert_eq!(config.effective_dir_with(None), PathBuf::from("/from/config"));
        assert!(Config::default().effective_dir_with(None).ends_with(".host-history/history"));
    }

    #[test]
    fn configured_dir_opens_store() -> Result<()> {
        let tmp = TempDir::new()?;
        let config = Config {
            store: StoreConfig {
                dir: Some(tmp.path().to_path_buf()),
            },
        };

        let store = FileStore::open(config.effective_dir_with(None))?;
        assert_eq!(store.base_dir(), tmp.path());

        let missing = Config {
            store: StoreConfig {
                dir: Some(tmp.path().join("missing")),
            },
        };
        assert!(FileStore::open(missing.effective_dir_with(None)).is_err());
        Ok(())
    }
}
