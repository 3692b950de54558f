// src/internal/level/level.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Severity of a log line, plus the `None` sentinel that disables a logger.
///
/// The ordinary severities are ordered `Trace < Debug < Info < Warn < Error`.
/// `None` sorts last but is never a threshold: a logger at `None` emits
/// nothing, including `Error`. Use [`LogLevel::permits`] rather than comparing
/// levels directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    /// Suppresses all output for the logger.
    None = 5,
}

/// Level used when configuration omits a level or names one we don't know.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

/// Returned by [`LogLevel::from_str`] for unrecognized text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized log level: {0:?}")]
pub struct ParseLevelError(pub String);

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::None,
    ];

    /// Upper-case tag used in log line prefixes and in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::None => "NONE",
        }
    }

    /// Whether a logger whose threshold is `self` emits a message at `message`.
    ///
    /// `None` short-circuits: it never permits anything, even though it sorts
    /// above `Error`.
    pub fn permits(self, message: LogLevel) -> bool {
        self != LogLevel::None && self <= message
    }

    /// Parse level text, falling back to [`DEFAULT_LEVEL`] on unknown input.
    ///
    /// Never fails. Unknown text is reported through `tracing` at WARN, which is
    /// dropped when no subscriber is installed.
    pub fn parse_lenient(text: &str) -> LogLevel {
        match text.parse() {
            Ok(level) => level,
            Err(err) => {
                warn!("{}, using {}", err, DEFAULT_LEVEL);
                DEFAULT_LEVEL
            }
        }
    }

    pub(crate) fn from_u8(raw: u8) -> LogLevel {
        match raw {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Unknown text must not abort config loading, so this never returns an error
// for a string value.
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(LogLevel::parse_lenient(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDINARY: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    #[test]
    fn test_ordinary_levels_gate_by_severity() {
        for threshold in ORDINARY {
            for message in ORDINARY {
                assert_eq!(
                    threshold.permits(message),
                    message >= threshold,
                    "threshold={threshold} message={message}"
                );
            }
        }
    }

    #[test]
    fn test_none_never_permits() {
        for message in LogLevel::ALL {
            assert!(!LogLevel::None.permits(message), "NONE let {message} through");
        }
    }

    #[test]
    fn test_none_sorts_above_error() {
        assert!(LogLevel::None > LogLevel::Error);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("trace".parse::<LogLevel>(), Ok(LogLevel::Trace));
        assert_eq!("TRACE".parse::<LogLevel>(), Ok(LogLevel::Trace));
        assert_eq!("Warn".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!(" none ".parse::<LogLevel>(), Ok(LogLevel::None));
    }

    #[test]
    fn test_parse_unknown_is_error() {
        assert_eq!(
            "bogus".parse::<LogLevel>(),
            Err(ParseLevelError("bogus".to_string()))
        );
    }

    #[test]
    fn test_parse_lenient_falls_back_to_info() {
        assert_eq!(LogLevel::parse_lenient("bogus"), LogLevel::Info);
        assert_eq!(LogLevel::parse_lenient(""), LogLevel::Info);
        assert_eq!(LogLevel::parse_lenient("error"), LogLevel::Error);
    }

    #[test]
    fn test_deserialize_unknown_level_does_not_fail() {
        let level: LogLevel = serde_yaml::from_str("verbose").unwrap();
        assert_eq!(level, LogLevel::Info);
    }

    #[test]
    fn test_u8_conversion_matches_discriminants() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_u8(level as u8), level);
        }
    }
}
