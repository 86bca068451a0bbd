use crate::domain::Severity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON with LogFilePath and Level)
    #[arg(long, env = "LOGBOOK_CONFIG", default_value = "config.json")]
    pub config: PathBuf,

    /// Override the destination from the configuration file
    #[arg(long, env = "LOGBOOK_DESTINATION")]
    pub destination: Option<PathBuf>,

    /// Minimum level applied after the configuration is loaded
    #[arg(long, ignore_case = true)]
    pub level: Option<Severity>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write one record
    Log {
        #[arg(long, ignore_case = true, default_value = "info")]
        level: Severity,

        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Replay records from the destination
    Read {
        /// Only lines tagged with this level
        #[arg(long, ignore_case = true)]
        level: Option<Severity>,

        /// Parse each line and filter on the parsed level instead of the tag text
        #[arg(long)]
        parsed: bool,
    },

    /// Print the effective configuration
    Config,

    /// Log from several threads at once, then replay the destination
    Demo {
        #[arg(long, default_value = "4")]
        workers: usize,

        #[arg(long, default_value = "5")]
        messages: usize,
    },
}
