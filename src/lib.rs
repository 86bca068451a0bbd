#![warn(rust_2018_idioms)]
#![deny(
    clippy::unwrap_used,
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned
)]
#![allow(
    clippy::missing_errors_doc, // Internal API
    clippy::module_name_repetitions, // e.g. LogError in the error module
    clippy::must_use_candidate
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod reader;
pub mod service;
pub mod sink;

// Re-export main types for easy access
pub use config::LogConfig;
pub use domain::{LogLine, LogRecord, Severity};
pub use error::LogError;
pub use reader::{LogReader, ReadBack};
pub use service::LogService;
pub use sink::{Echo, LogSink, MemoryEcho, NoopEcho, StdoutEcho};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
