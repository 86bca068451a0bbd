pub mod cli;
pub mod tracing;

pub use cli::{Cli, Command};

use crate::config::LogConfig;
use crate::domain::Severity;
use crate::reader::{NO_LOGS_NOTICE, ReadBack};
use crate::service::LogService;
use anyhow::{Context, Result};
use clap::Parser;
use std::thread;

pub fn main() -> Result<()> {
    let cli = Cli::parse();
    // Records still reach the destination without diagnostics.
    if let Err(e) = tracing::init_tracing() {
        eprintln!("Warning: tracing not initialized: {e}");
    }
    run(&cli, LogService::global())
}

/// Applies the CLI configuration to `service` and executes the command.
pub fn run(cli: &Cli, service: &LogService) -> Result<()> {
    configure(cli, service)?;

    match &cli.command {
        Command::Log { level, message } => {
            service
                .log(&message.join(" "), *level)
                .context("failed to write log record")?;
        }
        Command::Read { level, parsed } => read(service, *level, *parsed)?,
        Command::Config => {
            let config = service.config();
            println!("{}", serde_json::to_string_pretty(&*config)?);
        }
        Command::Demo { workers, messages } => demo(service, *workers, *messages)?,
    }
    Ok(())
}

fn configure(cli: &Cli, service: &LogService) -> Result<()> {
    service
        .load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if let Some(destination) = &cli.destination {
        let current = service.config();
        service.replace_config(LogConfig::new(destination, current.minimum_level))?;
    }
    if let Some(level) = cli.level {
        service.set_log_level(level);
    }
    Ok(())
}

fn read(service: &LogService, level: Option<Severity>, parsed: bool) -> Result<()> {
    let reader = service.reader();

    if parsed {
        if !reader.path().exists() {
            println!("{NO_LOGS_NOTICE}");
            return Ok(());
        }
        for entry in reader.read_entries(level)? {
            println!("{} {} {}", entry.time, entry.level.tag(), entry.message);
        }
        return Ok(());
    }

    match reader.read_logs(level)? {
        ReadBack::NotFound => println!("{NO_LOGS_NOTICE}"),
        ReadBack::Lines(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn demo(service: &LogService, workers: usize, messages: usize) -> Result<()> {
    let failures = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                scope.spawn(move || {
                    (0..messages)
                        .filter_map(|i| {
                            let level = Severity::ALL[(worker + i) % Severity::ALL.len()];
                            let message = format!("worker {worker} message {i}");
                            service.log(&message, level).err()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| anyhow::anyhow!("demo worker panicked"))
            })
            .collect::<Result<Vec<_>>>()
    })?;

    if let Some(first) = failures.into_iter().flatten().next() {
        return Err(first).context("demo worker failed to log");
    }

    let written = service.reader().read_logs(None)?.into_lines().len();
    println!("{written} lines in {}", service.config().destination.display());
    Ok(())
}
