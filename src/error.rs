use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    /// The configuration source exists but could not be accepted. The
    /// previously active configuration stays in effect.
    #[error("Invalid configuration in {path}: {reason}")]
    Configuration { path: PathBuf, reason: String },

    #[error("Log destination {path} is unavailable: {source}")]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read logs from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Echo sink error: {0}")]
    Echo(#[source] std::io::Error),
}

impl LogError {
    pub(crate) fn configuration(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        LogError::Configuration {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
