//! Error types for worktrack-core.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine home directory")]
    HomeDirMissing,

    // === Configuration Errors ===
    #[error("failed to load configuration from {path}: {source}")]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("failed to set up log file: {0}")]
    LogInit(#[from] tracing_appender::rolling::InitError),

    // === Input Errors ===
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),

    #[error("invalid hours '{input}': {reason}")]
    InvalidHours { input: String, reason: &'static str },

    #[error("requirement must not be empty")]
    EmptyRequirement,

    #[error("requirement index {index} out of range (have {len})")]
    RequirementIndex { index: usize, len: usize },

    #[error("no date selected")]
    NoDateSelected,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_hours(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidHours {
            input: input.into(),
            reason,
        }
    }

    /// Input errors are safe to show to the user and retry; everything else
    /// is an environment problem.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_)
                | Self::InvalidMonth(_)
                | Self::InvalidHours { .. }
                | Self::EmptyRequirement
                | Self::RequirementIndex { .. }
                | Self::NoDateSelected
        )
    }
}
