//! Serialized append access to the destination file.
//!
//! The active configuration is an immutable `Arc<LogConfig>`: readers clone the
//! pointer under a short read lock and writers swap in a whole new value, so a
//! half-updated configuration is never observed. Each qualifying record is
//! rendered, appended and echoed while holding the writer mutex; the file
//! handle is kept open until the configured destination changes.

use super::Echo;
use crate::config::LogConfig;
use crate::domain::{LINE_ENDING, LogRecord, Severity};
use crate::error::LogError;
use parking_lot::{Mutex, RwLock};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Open handle plus the path it was opened for.
struct OpenDestination {
    path: PathBuf,
    file: File,
}

pub struct LogSink {
    config: RwLock<Arc<LogConfig>>,
    writer: Mutex<Option<OpenDestination>>,
    echo: Arc<dyn Echo>,
}

impl LogSink {
    pub fn new(config: LogConfig, echo: Arc<dyn Echo>) -> Self {
        Self {
            config: RwLock::new(Arc::new(config)),
            writer: Mutex::new(None),
            echo,
        }
    }

    /// Snapshot of the active configuration.
    pub fn config(&self) -> Arc<LogConfig> {
        self.config.read().clone()
    }

    pub fn replace_config(&self, config: LogConfig) {
        *self.config.write() = Arc::new(config);
    }

    pub fn set_minimum_level(&self, level: Severity) {
        let mut current = self.config.write();
        let updated = current.with_level(level);
        *current = Arc::new(updated);
    }

    /// Writes `message` if `level` passes the current threshold.
    ///
    /// Returns `Ok(false)` when the record was filtered out. The threshold and
    /// destination come from a snapshot taken before the writer lock, so a
    /// concurrent level change may not apply to a call already in flight.
    pub fn submit(&self, level: Severity, message: &str) -> Result<bool, LogError> {
        let config = self.config();
        if !level.admits(config.minimum_level) {
            return Ok(false);
        }

        let mut writer = self.writer.lock();
        // Timestamp under the lock keeps file order and time order aligned.
        let line = LogRecord::new(level, message).render();

        let file = Self::destination_file(&mut writer, &config.destination)?;
        let mut bytes = String::with_capacity(line.len() + LINE_ENDING.len());
        bytes.push_str(&line);
        bytes.push_str(LINE_ENDING);

        if let Err(source) = file.write_all(bytes.as_bytes()).and_then(|()| file.flush()) {
            warn!(path = %config.destination.display(), error = %source, "Failed to append log record");
            *writer = None;
            return Err(LogError::DestinationUnavailable {
                path: config.destination.clone(),
                source,
            });
        }

        self.echo.emit(&line).map_err(LogError::Echo)?;
        Ok(true)
    }

    fn destination_file<'a>(
        slot: &'a mut Option<OpenDestination>,
        path: &Path,
    ) -> Result<&'a mut File, LogError> {
        let open = match slot.take() {
            Some(open) if open.path == path => slot.insert(open),
            _ => slot.insert(Self::open_destination(path)?),
        };
        Ok(&mut open.file)
    }

    fn open_destination(path: &Path) -> Result<OpenDestination, LogError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| {
                warn!(path = %path.display(), error = %source, "Log destination unavailable");
                LogError::DestinationUnavailable {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        debug!(path = %path.display(), "Opened log destination");
        Ok(OpenDestination {
            path: path.to_path_buf(),
            file,
        })
    }
}
