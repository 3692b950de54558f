// src/internal/registry/registry.rs

use std::sync::{Arc, OnceLock};

use crate::internal::config::{ConfigLocator, LogConfig, LoggerSettings, ROOT_LOGGER};
use crate::internal::error::{abort, LoggingError, Result};
use crate::internal::level::LogLevel;
use crate::internal::logger::{Logger, StderrSink};

static CONFIGURATION: OnceLock<LogConfig> = OnceLock::new();
static ROOT: OnceLock<Logger> = OnceLock::new();
static NULL: OnceLock<Logger> = OnceLock::new();

/// Builds loggers from a resolved configuration.
///
/// Every call to [`LoggerFactory::try_new_logger`] returns a fresh logger;
/// nothing is cached by name.
#[derive(Debug, Clone, Copy)]
pub struct LoggerFactory<'a> {
    config: &'a LogConfig,
}

impl<'a> LoggerFactory<'a> {
    pub fn new(config: &'a LogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a LogConfig {
        self.config
    }

    /// Settings for `name`, falling back to the `default` entry.
    pub fn settings(&self, name: &str) -> &'a LoggerSettings {
        self.config.settings(name)
    }

    pub fn try_new_logger(&self, name: &str) -> Result<Logger> {
        Logger::from_settings(name, self.settings(name))
    }
}

/// Supply the process configuration instead of resolving it from the
/// environment. Only valid before anything has read the configuration.
pub fn install(config: LogConfig) -> Result<()> {
    CONFIGURATION
        .set(config)
        .map_err(|_| LoggingError::AlreadyInitialized)
}

/// Process configuration, resolving it from the environment on first use.
pub fn try_configuration() -> Result<&'static LogConfig> {
    if let Some(config) = CONFIGURATION.get() {
        return Ok(config);
    }
    let resolved = ConfigLocator::from_env().resolve()?;
    // A concurrent first caller may have won; both resolved the same inputs.
    Ok(CONFIGURATION.get_or_init(|| resolved))
}

/// Like [`try_configuration`], but a malformed config file terminates the
/// process with a diagnostic.
pub fn configuration() -> &'static LogConfig {
    match try_configuration() {
        Ok(config) => config,
        Err(err) => abort(&err),
    }
}

pub fn factory() -> LoggerFactory<'static> {
    LoggerFactory::new(configuration())
}

pub fn get_settings(name: &str) -> &'static LoggerSettings {
    factory().settings(name)
}

pub fn try_new_logger(name: &str) -> Result<Logger> {
    factory().try_new_logger(name)
}

/// Create a logger for `name`; a destination that cannot be opened
/// terminates the process with a diagnostic.
pub fn new_logger(name: &str) -> Logger {
    match try_new_logger(name) {
        Ok(logger) => logger,
        Err(err) => abort(&err),
    }
}

/// Process-wide bootstrap logger, configured under `root`.
///
/// Built on first use, strictly after the configuration has been resolved,
/// and kept for the life of the process.
pub fn root_logger() -> &'static Logger {
    ROOT.get_or_init(|| new_logger(ROOT_LOGGER))
}

/// Process-wide logger at [`LogLevel::None`]: nothing it is given is ever
/// written.
pub fn null_logger() -> &'static Logger {
    NULL.get_or_init(|| Logger::with_sink("null", LogLevel::None, Arc::new(StderrSink)))
}
