// src/internal/logger/diagnostics.rs

use tracing_subscriber::{
    fmt::{self},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Install a global `tracing` subscriber so the facade's own diagnostics
/// (missing config file, unknown level names, ...) are printed to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`. Fails if a global
/// subscriber is already installed.
pub fn init_diagnostics(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_level(true)
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .try_init()?;

    Ok(())
}
