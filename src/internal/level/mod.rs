// src/internal/level/mod.rs

pub mod level;

pub use level::{LogLevel, ParseLevelError, DEFAULT_LEVEL};
