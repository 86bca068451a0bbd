use super::Severity;
use chrono::{DateTime, Local, NaiveTime};
use regex::Regex;
use std::sync::OnceLock;

/// Line terminator appended after every rendered record.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

const TIME_FORMAT: &str = "%H:%M:%S";

const LINE_PATTERN_SRC: &str = r"^(\d{2}:\d{2}:\d{2}) \[(INFO|WARNING|ERROR)\] (.*)$";

static LINE_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn line_pattern() -> Option<&'static Regex> {
    LINE_PATTERN
        .get_or_init(|| Regex::new(LINE_PATTERN_SRC).ok())
        .as_ref()
}

/// A record on its way to the destination. It is rendered to a single line
/// and dropped; nothing else retains it.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: Severity,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: Severity, message: impl Into<String>) -> Self {
        Self::at(Local::now(), level, message)
    }

    pub fn at(timestamp: DateTime<Local>, level: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
        }
    }

    /// `HH:MM:SS [LEVEL] message`, without a line terminator. CR and LF in
    /// the message are written as `\r` and `\n` so a record is always one line.
    pub fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.timestamp.format(TIME_FORMAT),
            self.level.tag(),
            escape_line_breaks(&self.message)
        )
    }
}

fn escape_line_breaks(message: &str) -> std::borrow::Cow<'_, str> {
    if !message.contains(['\r', '\n']) {
        return std::borrow::Cow::Borrowed(message);
    }
    let mut escaped = String::with_capacity(message.len() + 4);
    for ch in message.chars() {
        match ch {
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    std::borrow::Cow::Owned(escaped)
}

/// A destination line split back into its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub time: NaiveTime,
    pub level: Severity,
    pub message: String,
}

impl LogLine {
    /// Parses one destination line. Returns `None` for anything that is not
    /// exactly `HH:MM:SS [LEVEL] message`, including a torn last line.
    pub fn parse(line: &str) -> Option<Self> {
        let caps = line_pattern()?.captures(line)?;
        let time = NaiveTime::parse_from_str(&caps[1], TIME_FORMAT).ok()?;
        let level = caps[2].parse().ok()?;
        Some(Self {
            time,
            level,
            message: caps[3].to_string(),
        })
    }
}
