// src/internal/config/mod.rs

pub mod config;
pub mod locator;

pub use config::{
    LogConfig, LoggerSettings, WriterTarget, DEFAULT_LOGGER, DEFAULT_WRITER, ROOT_LOGGER,
};
pub use locator::{
    ConfigLocator, CONFIG_DIR_ENV_VAR, CONFIG_DIR_NAME, CONFIG_FILE_ENV_VAR, CONFIG_FILE_NAME,
};
