//! Read-back of destination files.
//!
//! Two modes are offered:
//!
//! - [`LogReader::read_logs`] keeps each line as text and filters by checking
//!   whether the line *contains* the bracketed tag (`[WARNING]` etc.). A
//!   message body that happens to include a tag matches too.
//! - [`LogReader::read_entries`] parses every line into a [`LogLine`] and
//!   filters on the parsed level, skipping lines that do not parse.
//!
//! Neither mode locks against writers, so a line being appended concurrently
//! may show up truncated.

use crate::domain::{LogLine, Severity};
use crate::error::LogError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const NO_LOGS_NOTICE: &str = "No logs found.";

/// Result of reading a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadBack {
    /// The destination does not exist. Not an error.
    NotFound,
    Lines(Vec<String>),
}

impl ReadBack {
    pub fn lines(&self) -> &[String] {
        match self {
            ReadBack::NotFound => &[],
            ReadBack::Lines(lines) => lines,
        }
    }

    pub fn into_lines(self) -> Vec<String> {
        match self {
            ReadBack::NotFound => Vec::new(),
            ReadBack::Lines(lines) => lines,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ReadBack::NotFound)
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.is_not_found().then_some(NO_LOGS_NOTICE)
    }
}

#[derive(Debug, Clone)]
pub struct LogReader {
    path: PathBuf,
}

impl LogReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lines of the destination in file order, optionally limited to those
    /// containing `filter`'s tag.
    pub fn read_logs(&self, filter: Option<Severity>) -> Result<ReadBack, LogError> {
        let Some(content) = self.read_content()? else {
            return Ok(ReadBack::NotFound);
        };

        let lines = content
            .lines()
            .filter(|line| filter.is_none_or(|level| line.contains(level.tag())))
            .map(str::to_string)
            .collect::<Vec<_>>();
        debug!(path = %self.path.display(), count = lines.len(), "Read log lines");
        Ok(ReadBack::Lines(lines))
    }

    /// Parsed entries in file order, optionally limited to those whose level
    /// equals `filter`. Malformed lines are skipped.
    pub fn read_entries(&self, filter: Option<Severity>) -> Result<Vec<LogLine>, LogError> {
        let Some(content) = self.read_content()? else {
            return Ok(Vec::new());
        };

        let mut skipped = 0usize;
        let entries = content
            .lines()
            .filter_map(|line| {
                let parsed = LogLine::parse(line);
                if parsed.is_none() {
                    skipped += 1;
                }
                parsed
            })
            .filter(|entry| filter.is_none_or(|level| entry.level == level))
            .collect::<Vec<_>>();
        if skipped > 0 {
            debug!(path = %self.path.display(), skipped, "Skipped malformed log lines");
        }
        Ok(entries)
    }

    fn read_content(&self) -> Result<Option<String>, LogError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "{NO_LOGS_NOTICE}");
                Ok(None)
            }
            Err(source) => Err(LogError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
