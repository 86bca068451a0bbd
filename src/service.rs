use crate::config::LogConfig;
use crate::domain::Severity;
use crate::error::LogError;
use crate::reader::LogReader;
use crate::sink::{Echo, LogSink, StdoutEcho};
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

static GLOBAL: OnceLock<LogService> = OnceLock::new();

/// Access point for writing log records.
///
/// One process-wide instance is reachable through [`LogService::global`] and is
/// created on first use with the default configuration. Composition roots that
/// prefer to pass the service by reference can build their own with
/// [`LogService::new`] or [`LogService::with_echo`].
pub struct LogService {
    sink: LogSink,
}

impl LogService {
    /// Returns the process-wide instance, creating it on the first call.
    pub fn global() -> &'static LogService {
        GLOBAL.get_or_init(|| {
            debug!("Initializing global log service");
            LogService::default()
        })
    }

    pub fn new(config: LogConfig) -> Self {
        Self::with_echo(config, Arc::new(StdoutEcho))
    }

    pub fn with_echo(config: LogConfig, echo: Arc<dyn Echo>) -> Self {
        Self {
            sink: LogSink::new(config, echo),
        }
    }

    /// Replaces the configuration with the one stored at `path`.
    ///
    /// A missing file is not an error and leaves the current configuration in
    /// place. An invalid file returns `LogError::Configuration` and also leaves
    /// the current configuration in place.
    pub fn load_config(&self, path: impl AsRef<Path>) -> Result<(), LogError> {
        let path = path.as_ref();
        match LogConfig::load(path)? {
            Some(config) => {
                info!(
                    source = %path.display(),
                    destination = %config.destination.display(),
                    level = %config.minimum_level,
                    "Loaded log configuration"
                );
                self.sink.replace_config(config);
            }
            None => {
                debug!(source = %path.display(), "No configuration file, keeping current settings");
            }
        }
        Ok(())
    }

    /// Replaces the configuration with an already-built value after validating it.
    pub fn replace_config(&self, config: LogConfig) -> Result<(), LogError> {
        config
            .validate()
            .map_err(|reason| LogError::configuration(&config.destination, reason))?;
        self.sink.replace_config(config);
        Ok(())
    }

    pub fn set_log_level(&self, level: Severity) {
        self.sink.set_minimum_level(level);
        debug!(%level, "Minimum log level changed");
    }

    /// Appends `message` at `level` to the destination and echoes it, unless
    /// `level` is below the configured minimum.
    pub fn log(&self, message: &str, level: Severity) -> Result<(), LogError> {
        self.sink.submit(level, message).map(|_| ())
    }

    pub fn info(&self, message: &str) -> Result<(), LogError> {
        self.log(message, Severity::Info)
    }

    pub fn warning(&self, message: &str) -> Result<(), LogError> {
        self.log(message, Severity::Warning)
    }

    pub fn error(&self, message: &str) -> Result<(), LogError> {
        self.log(message, Severity::Error)
    }

    pub fn config(&self) -> Arc<LogConfig> {
        self.sink.config()
    }

    /// Reader over the destination currently configured.
    pub fn reader(&self) -> LogReader {
        LogReader::new(&self.config().destination)
    }
}

impl Default for LogService {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemoryEcho;
    use std::fs;
    use tempfile::TempDir;
    use tracing_test::traced_test;

    fn service_in(temp_dir: &TempDir) -> (LogService, Arc<MemoryEcho>) {
        let echo = Arc::new(MemoryEcho::new());
        let config = LogConfig::new(temp_dir.path().join("service.log"), Severity::Info);
        (LogService::with_echo(config, echo.clone()), echo)
    }

    #[test]
    fn test_default_configuration() {
        let service = LogService::new(LogConfig::default());
        assert_eq!(*service.config(), LogConfig::default());
    }

    #[test]
    fn test_log_writes_and_echoes_once() {
        let temp_dir = TempDir::new().unwrap();
        let (service, echo) = service_in(&temp_dir);

        service.log("started", Severity::Warning).unwrap();

        let content = fs::read_to_string(temp_dir.path().join("service.log")).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert_eq!(echo.lines().len(), 1);
        assert_eq!(content.lines().next().unwrap(), echo.lines()[0]);
    }

    #[test]
    fn test_convenience_methods_use_their_level() {
        let temp_dir = TempDir::new().unwrap();
        let (service, echo) = service_in(&temp_dir);

        service.info("i").unwrap();
        service.warning("w").unwrap();
        service.error("e").unwrap();

        let lines = echo.lines();
        assert!(lines[0].ends_with("[INFO] i"));
        assert!(lines[1].ends_with("[WARNING] w"));
        assert!(lines[2].ends_with("[ERROR] e"));
    }

    #[test]
    fn test_load_config_missing_file_keeps_current() {
        let temp_dir = TempDir::new().unwrap();
        let (service, _echo) = service_in(&temp_dir);
        service.set_log_level(Severity::Error);
        let before = service.config();

        service
            .load_config(temp_dir.path().join("missing.json"))
            .unwrap();

        assert_eq!(*service.config(), *before);
    }

    #[test]
    fn test_load_config_invalid_file_keeps_last_good() {
        let temp_dir = TempDir::new().unwrap();
        let (service, _echo) = service_in(&temp_dir);
        let good = temp_dir.path().join("good.json");
        let bad = temp_dir.path().join("bad.json");
        fs::write(&good, r#"{"LogFilePath": "good.log", "Level": "WARNING"}"#).unwrap();
        fs::write(&bad, r#"{"LogFilePath": "bad.log", "Level": "VERBOSE"}"#).unwrap();

        service.load_config(&good).unwrap();
        let err = service.load_config(&bad).unwrap_err();

        assert!(matches!(err, LogError::Configuration { .. }));
        assert_eq!(*service.config(), LogConfig::new("good.log", Severity::Warning));
    }

    #[traced_test]
    #[test]
    fn test_load_config_logs_new_settings() {
        let temp_dir = TempDir::new().unwrap();
        let (service, _echo) = service_in(&temp_dir);
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"LogFilePath": "traced.log", "Level": "ERROR"}"#).unwrap();

        service.load_config(&path).unwrap();

        assert!(logs_contain("Loaded log configuration"));
        assert!(logs_contain("traced.log"));
    }

    #[test]
    fn test_replace_config_rejects_empty_destination() {
        let temp_dir = TempDir::new().unwrap();
        let (service, _echo) = service_in(&temp_dir);
        let before = service.config();

        let err = service
            .replace_config(LogConfig::new("", Severity::Error))
            .unwrap_err();

        assert!(matches!(err, LogError::Configuration { .. }));
        assert_eq!(*service.config(), *before);
    }

    #[test]
    fn test_reader_follows_destination() {
        let temp_dir = TempDir::new().unwrap();
        let (service, _echo) = service_in(&temp_dir);
        assert_eq!(service.reader().path(), temp_dir.path().join("service.log"));
    }

    #[test]
    fn test_global_is_created_once() {
        let first = LogService::global();
        let second = LogService::global();
        assert!(std::ptr::eq(first, second));
    }
}
