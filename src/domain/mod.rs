//! Domain layer for logbook.
//!
//! Contains the types shared across all modules:
//! - `Severity`: ordered record level (INFO < WARNING < ERROR)
//! - `LogRecord`: a single record and its one-line text form
//! - `LogLine`: a line parsed back out of a destination file

pub mod log_record;
pub mod severity;

pub use log_record::{LINE_ENDING, LogLine, LogRecord};
pub use severity::Severity;
