use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    /// The host history store could not be read. Callers should treat the
    /// whole history subsystem as unusable for now; nothing is retried here.
    #[error("history host unavailable: {reason}")]
    HostUnavailable { reason: String },

    #[error("a history host is already installed")]
    AlreadyInstalled,
}

impl HistoryError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        HistoryError::HostUnavailable {
            reason: reason.into(),
        }
    }

    pub fn is_host_unavailable(&self) -> bool {
        matches!(self, HistoryError::HostUnavailable { .. })
    }
}

impl From<std::io::Error> for HistoryError {
    fn from(err: std::io::Error) -> Self {
        HistoryError::unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(err: serde_json::Error) -> Self {
        HistoryError::unavailable(format!("corrupted history data: {}", err))
    }
}
