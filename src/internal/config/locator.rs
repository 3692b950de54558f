// src/internal/config/locator.rs

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::config::LogConfig;
use crate::internal::error::{LoggingError, Result};

pub const CONFIG_DIR_ENV_VAR: &str = "SLF4GO_CONFIG_DIR";
pub const CONFIG_FILE_ENV_VAR: &str = "SLF4GO_CONFIG_FILE";
/// Directory under `$HOME` searched when `SLF4GO_CONFIG_DIR` is unset.
pub const CONFIG_DIR_NAME: &str = ".slf4go";
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Where to look for the logging configuration file.
///
/// Each field is one tier of the lookup, so a locator can be built by hand
/// without touching the process environment. [`ConfigLocator::from_env`]
/// fills it from `SLF4GO_CONFIG_DIR`, `SLF4GO_CONFIG_FILE`, `HOME` and the
/// current directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLocator {
    /// Explicit config directory; overrides `<home_dir>/.slf4go`.
    pub config_dir: Option<PathBuf>,
    /// Explicit config filename; overrides `config.yaml`.
    pub config_file: Option<String>,
    pub home_dir: Option<PathBuf>,
    pub working_dir: PathBuf,
}

impl ConfigLocator {
    pub fn from_env() -> Self {
        Self {
            config_dir: env::var_os(CONFIG_DIR_ENV_VAR).map(PathBuf::from),
            config_file: env::var(CONFIG_FILE_ENV_VAR).ok(),
            home_dir: home_dir(),
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Directory searched after the working directory, if one can be determined.
    pub fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir
            .clone()
            .or_else(|| self.home_dir.as_ref().map(|home| home.join(CONFIG_DIR_NAME)))
    }

    pub fn file_name(&self) -> &str {
        self.config_file.as_deref().unwrap_or(CONFIG_FILE_NAME)
    }

    /// Candidate paths in lookup order: working directory first, then the
    /// config directory.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let file_name = self.file_name();
        let tiers = [Some(self.working_dir.clone()), self.config_dir()];

        let mut candidates: Vec<PathBuf> = Vec::with_capacity(tiers.len());
        for dir in tiers.into_iter().flatten() {
            let path = dir.join(file_name);
            if !candidates.contains(&path) {
                candidates.push(path);
            }
        }
        candidates
    }

    /// First candidate that exists and can be read, with its contents.
    pub fn locate(&self) -> Option<(PathBuf, String)> {
        self.candidates().into_iter().find_map(|path| read_candidate(&path))
    }

    /// Run the lookup and decode whatever it finds.
    ///
    /// No file is not an error: the built-in defaults are returned. A file that
    /// exists but does not decode is [`LoggingError::MalformedConfig`].
    pub fn resolve(&self) -> Result<LogConfig> {
        let Some((path, text)) = self.locate() else {
            warn!(
                searched = ?self.candidates(),
                "no log configuration found, using built-in defaults"
            );
            return Ok(LogConfig::default());
        };

        let config = LogConfig::from_yaml(&text).map_err(|err| match err {
            LoggingError::Decode(source) => LoggingError::MalformedConfig {
                path: path.clone(),
                source,
            },
            other => other,
        })?;

        info!(
            "Loaded log configuration from {} ({} loggers)",
            path.display(),
            config.len()
        );
        Ok(config.with_source(&path))
    }
}

fn read_candidate(path: &Path) -> Option<(PathBuf, String)> {
    if !path.is_file() {
        debug!("Log configuration candidate not present: {}", path.display());
        return None;
    }
    match fs::read_to_string(path) {
        Ok(text) => Some((path.to_path_buf(), text)),
        Err(err) => {
            warn!("Skipping unreadable log configuration {}: {}", path.display(), err);
            None
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    let home = env::var_os("HOME").filter(|value| !value.is_empty());
    #[cfg(windows)]
    let home = home.or_else(|| env::var_os("USERPROFILE").filter(|value| !value.is_empty()));
    home.map(PathBuf::from)
}
