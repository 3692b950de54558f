// src/internal/config/config.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::internal::error::Result;
use crate::internal::level::{LogLevel, DEFAULT_LEVEL};

/// Reserved logger name holding the fallback settings.
pub const DEFAULT_LOGGER: &str = "default";
/// Logger name the process root logger is configured under.
pub const ROOT_LOGGER: &str = "root";
/// Writer used when a logger does not name one.
pub const DEFAULT_WRITER: &str = "stderr";

/// Settings for a single named logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    #[serde(default)]
    pub level: LogLevel,
    /// `stdout`/`console`, `stderr` (or empty), or a file path.
    #[serde(default)]
    pub writer: String,
}

impl LoggerSettings {
    pub fn new(level: LogLevel, writer: impl Into<String>) -> Self {
        Self {
            level,
            writer: writer.into(),
        }
    }

    pub fn target(&self) -> WriterTarget {
        WriterTarget::parse(&self.writer)
    }
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL, DEFAULT_WRITER)
    }
}

/// Destination a writer setting resolves to.
///
/// Anything that is not a stream token is taken as a file path, typos
/// included (`"stdot"` opens a file named `stdot`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterTarget {
    Stdout,
    Stderr,
    File(PathBuf),
}

impl WriterTarget {
    pub fn parse(writer: &str) -> Self {
        let token = writer.trim();
        if token.is_empty() || token.eq_ignore_ascii_case("stderr") {
            WriterTarget::Stderr
        } else if token.eq_ignore_ascii_case("stdout") || token.eq_ignore_ascii_case("console") {
            WriterTarget::Stdout
        } else {
            WriterTarget::File(PathBuf::from(token))
        }
    }
}

/// Resolved mapping from logger name to settings.
///
/// Always holds a [`DEFAULT_LOGGER`] entry; constructors synthesize one when
/// the source does not provide it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLogConfig")]
pub struct LogConfig {
    loggers: HashMap<String, LoggerSettings>,
    #[serde(skip)]
    source: Option<PathBuf>,
}

impl LogConfig {
    /// Build from an explicit mapping, adding the default entry if missing.
    pub fn new(loggers: HashMap<String, LoggerSettings>) -> Self {
        let mut config = Self {
            loggers,
            source: None,
        };
        config.ensure_default();
        config
    }

    /// Decode YAML text of the shape `loggers: {<name>: {level, writer}}`.
    ///
    /// Empty text is an empty mapping, not an error.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    pub(crate) fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    /// File this configuration was loaded from, `None` for built-in defaults.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Settings for `name`, or the default entry when `name` is not configured.
    pub fn settings(&self, name: &str) -> &LoggerSettings {
        self.loggers
            .get(name)
            .or_else(|| self.loggers.get(DEFAULT_LOGGER))
            .expect("default logger entry is always present")
    }

    /// Settings configured explicitly under `name`, without fallback.
    pub fn get(&self, name: &str) -> Option<&LoggerSettings> {
        self.loggers.get(name)
    }

    pub fn default_settings(&self) -> &LoggerSettings {
        self.settings(DEFAULT_LOGGER)
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.loggers.keys().map(String::as_str)
    }

    fn ensure_default(&mut self) {
        self.loggers
            .entry(DEFAULT_LOGGER.to_string())
            .or_default();
    }
}

#[derive(Deserialize)]
struct RawLogConfig {
    #[serde(default)]
    loggers: HashMap<String, LoggerSettings>,
}

impl From<RawLogConfig> for LogConfig {
    fn from(raw: RawLogConfig) -> Self {
        Self::new(raw.loggers)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_only_default_entry() {
        let config = LogConfig::default();

        assert_eq!(config.len(), 1);
        assert_eq!(
            config.default_settings(),
            &LoggerSettings::new(LogLevel::Info, "stderr")
        );
        assert!(config.source().is_none());
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        let config = LogConfig::from_yaml(
            r#"
loggers:
  mylog:
    level: TRACE
    writer: console
"#,
        )
        .unwrap();

        assert_eq!(config.settings("anything-else"), config.default_settings());
        assert_eq!(config.settings("mylog").level, LogLevel::Trace);
    }

    #[test]
    fn test_missing_default_is_synthesized() {
        let config = LogConfig::from_yaml("loggers: {mylog: {level: TRACE, writer: console}}").unwrap();

        assert_eq!(
            config.get("mylog"),
            Some(&LoggerSettings::new(LogLevel::Trace, "console"))
        );
        assert_eq!(config.get(DEFAULT_LOGGER), Some(&LoggerSettings::default()));
    }

    #[test]
    fn test_explicit_default_is_kept() {
        let config = LogConfig::from_yaml(
            r#"
loggers:
  default:
    level: WARN
    writer: stdout
"#,
        )
        .unwrap();

        assert_eq!(
            config.default_settings(),
            &LoggerSettings::new(LogLevel::Warn, "stdout")
        );
        assert_eq!(config.settings("unlisted").level, LogLevel::Warn);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = LogConfig::from_yaml("loggers: {quiet: {}}").unwrap();
        let quiet = config.settings("quiet");

        assert_eq!(quiet.level, LogLevel::Info);
        assert_eq!(quiet.target(), WriterTarget::Stderr);
    }

    #[test]
    fn test_bogus_level_decodes_as_info() {
        let config = LogConfig::from_yaml("loggers: {x: {level: LOUD, writer: stdout}}").unwrap();
        assert_eq!(config.settings("x").level, LogLevel::Info);
    }

    #[test]
    fn test_empty_text_and_missing_loggers_key_are_valid() {
        assert_eq!(LogConfig::from_yaml("").unwrap(), LogConfig::default());
        assert_eq!(LogConfig::from_yaml("other: 1\n").unwrap(), LogConfig::default());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(LogConfig::from_yaml("loggers: [unclosed").is_err());
        assert!(LogConfig::from_yaml("loggers:\n  x: {level: [1, 2]}\n").is_err());
    }

    #[test]
    fn test_writer_targets() {
        assert_eq!(WriterTarget::parse(""), WriterTarget::Stderr);
        assert_eq!(WriterTarget::parse("stderr"), WriterTarget::Stderr);
        assert_eq!(WriterTarget::parse("stdout"), WriterTarget::Stdout);
        assert_eq!(WriterTarget::parse("console"), WriterTarget::Stdout);
        assert_eq!(WriterTarget::parse("CONSOLE"), WriterTarget::Stdout);
        assert_eq!(
            WriterTarget::parse("/var/log/app.log"),
            WriterTarget::File(PathBuf::from("/var/log/app.log"))
        );
        assert_eq!(
            WriterTarget::parse("stdot"),
            WriterTarget::File(PathBuf::from("stdot"))
        );
    }
}
