// src/internal/logger/mod.rs

pub mod diagnostics;
pub mod logger;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod sink;

pub use diagnostics::init_diagnostics;
pub use logger::{Loggable, Logger};
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MemorySink;
pub use sink::{open_sink, FileSink, LogSink, StderrSink, StdoutSink};

// The log_* macros are exported at the crate root via #[macro_export]:
// `slf4rs::log_info!(logger, "...")`.
