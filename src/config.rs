use crate::domain::Severity;
use crate::error::LogError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_DESTINATION: &str = "advanced_logs.txt";

/// Destination and threshold for the log service.
///
/// The on-disk shape is `{"LogFilePath": "...", "Level": "INFO"}`. Both fields
/// are required; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(rename = "LogFilePath")]
    pub destination: PathBuf,
    #[serde(rename = "Level")]
    pub minimum_level: Severity,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(DEFAULT_DESTINATION),
            minimum_level: Severity::Info,
        }
    }
}

impl LogConfig {
    pub fn new(destination: impl Into<PathBuf>, minimum_level: Severity) -> Self {
        Self {
            destination: destination.into(),
            minimum_level,
        }
    }

    /// Copy of this configuration with only the threshold changed.
    pub fn with_level(&self, minimum_level: Severity) -> Self {
        Self {
            destination: self.destination.clone(),
            minimum_level,
        }
    }

    /// Reads and validates the configuration at `path`.
    ///
    /// Returns `Ok(None)` when no file exists there, so the caller keeps
    /// whatever configuration it already has.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, LogError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LogError::configuration(path, e.to_string())),
        };
        Self::parse(path, &content).map(Some)
    }

    /// Parses configuration text; `origin` is only used in error messages.
    pub fn parse(origin: impl AsRef<Path>, content: &str) -> Result<Self, LogError> {
        let origin = origin.as_ref();
        let config: LogConfig = serde_json::from_str(content)
            .map_err(|e| LogError::configuration(origin, e.to_string()))?;
        config
            .validate()
            .map_err(|reason| LogError::configuration(origin, reason))?;
        Ok(config)
    }

    /// Validates the settings and returns the reason if invalid.
    pub fn validate(&self) -> Result<(), String> {
        validate_destination(&self.destination)
    }
}

/// Validates that the destination is not empty or whitespace-only.
fn validate_destination(destination: &Path) -> Result<(), String> {
    if destination.as_os_str().to_string_lossy().trim().is_empty() {
        return Err("LogFilePath cannot be empty".into());
    }
    Ok(())
}
