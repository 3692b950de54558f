//! Leveled logging facade: named loggers whose level and destination come
//! from an optional YAML file found through `SLF4GO_CONFIG_DIR`,
//! `SLF4GO_CONFIG_FILE` and `$HOME/.slf4go`.
//!
//! ```no_run
//! use slf4rs::{log_info, new_logger, LogLevel};
//!
//! let log = new_logger("example");
//! log_info!(log, "listening on {}", 8080);
//! log.set_level(LogLevel::Trace);
//! ```

pub mod cli;
pub mod internal;

// Re-export commonly used types
pub use internal::config::{ConfigLocator, LogConfig, LoggerSettings, WriterTarget};
pub use internal::error::LoggingError;
pub use internal::level::LogLevel;
pub use internal::logger::{init_diagnostics, LogSink, Loggable, Logger};
pub use internal::registry::{
    configuration, get_settings, new_logger, null_logger, root_logger, try_new_logger,
    LoggerFactory,
};
