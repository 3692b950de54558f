// src/internal/mod.rs

pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod registry;
pub mod version;
