// src/internal/registry/mod.rs

pub mod registry;

pub use registry::{
    configuration, factory, get_settings, install, new_logger, null_logger, root_logger,
    try_configuration, try_new_logger, LoggerFactory,
};
