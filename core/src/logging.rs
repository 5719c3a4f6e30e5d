//! Logging setup.
//!
//! One-shot commands log to stderr. The terminal UI owns the screen, so it
//! logs to `<data_dir>/logs/worktrack.log` instead.

use std::path::Path;

use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "worktrack.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    /// Maps `-q` and repeated `-v` flags.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

fn env_filter(level: &str) -> EnvFilter {
    // RUST_LOG wins over flags and config.
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("worktrack_core={level},worktrack_cli={level}"))
    })
}

/// Installs a stderr subscriber. Safe to call more than once.
pub fn init_logging(level: &str) {
    let subscriber = tracing_subscriber::registry().with(env_filter(level)).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false),
    );
    let _ = subscriber.try_init();
}

/// Installs a subscriber writing to `<data_dir>/logs/worktrack.log`.
pub fn init_file_logging(level: &str, data_dir: &Path) -> Result<()> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(data_dir.join("logs"))?;
    let subscriber = tracing_subscriber::registry().with(env_filter(level)).with(
        fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .with_target(true),
    );
    let _ = subscriber.try_init();
    Ok(())
}

#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
