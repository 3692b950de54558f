// src/internal/logger/logger.rs

use chrono::{DateTime, Local};
use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use super::sink::{open_sink, LogSink};
use crate::internal::config::LoggerSettings;
use crate::internal::error::Result;
use crate::internal::level::LogLevel;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A named logger bound to one destination.
///
/// The level can be changed through a shared reference, so a `&'static`
/// logger can still be promoted or demoted at runtime. Cloning forks the
/// logger: the clone writes to the same sink but owns its level.
pub struct Logger {
    name: String,
    level: AtomicU8,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn with_sink(name: impl Into<String>, level: LogLevel, sink: Arc<dyn LogSink>) -> Self {
        Self {
            name: name.into(),
            level: AtomicU8::new(level as u8),
            sink,
        }
    }

    /// Build a logger from its settings, opening the destination they name.
    pub fn from_settings(name: impl Into<String>, settings: &LoggerSettings) -> Result<Self> {
        let sink = open_sink(&settings.target())?;
        Ok(Self::with_sink(name, settings.level, sink))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.level().permits(level)
    }

    #[track_caller]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Trace, args);
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }

    /// Emit `args` at `level` if this logger's threshold permits it.
    ///
    /// Logging `LogLevel::None` is a no-op.
    #[track_caller]
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if level != LogLevel::None && self.is_enabled(level) {
            self.emit(level.as_str(), args, Location::caller());
        }
    }

    /// Write `err` regardless of level, then exit the process with status 1.
    #[track_caller]
    pub fn fatal(&self, err: impl fmt::Display) -> ! {
        self.emit("FATAL", format_args!("{}", err), Location::caller());
        std::process::exit(1)
    }

    fn emit(&self, tag: &str, args: fmt::Arguments<'_>, location: &Location<'_>) {
        let line = format_line(Local::now(), location, &self.name, tag, args);
        // A failed write is dropped; logging must not take the caller down.
        let _ = self.sink.write_line(&line);
    }
}

/// `2024/01/31 13:37:00 main.rs:42: name[INFO] message`
pub(crate) fn format_line(
    now: DateTime<Local>,
    location: &Location<'_>,
    name: &str,
    tag: &str,
    args: fmt::Arguments<'_>,
) -> String {
    let file = Path::new(location.file())
        .file_name()
        .and_then(|file| file.to_str())
        .unwrap_or_else(|| location.file());
    format!(
        "{} {}:{}: {}[{}] {}",
        now.format(TIMESTAMP_FORMAT),
        file,
        location.line(),
        name,
        tag,
        args
    )
}

impl Clone for Logger {
    fn clone(&self) -> Self {
        Self::with_sink(self.name.clone(), self.level(), Arc::clone(&self.sink))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

/// A type that owns a logger and lets callers adjust its level.
pub trait Loggable {
    fn set_log_level(&self, level: LogLevel);
}

impl Loggable for Logger {
    fn set_log_level(&self, level: LogLevel) {
        self.set_level(level);
    }
}

// Convenience logging macros
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.trace(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}
