// src/internal/error.rs

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to parse log configuration {path}: {source}")]
    MalformedConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid log configuration: {0}")]
    Decode(#[from] serde_yaml::Error),
    #[error("failed to open log file {path}: {source}")]
    OpenWriter {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("log configuration is already initialized")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, LoggingError>;

/// Print a diagnostic and terminate the process with status 1.
pub(crate) fn abort(err: &dyn std::fmt::Display) -> ! {
    eprintln!("slf4rs: fatal: {}", err);
    std::process::exit(1)
}
