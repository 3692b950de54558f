// src/internal/logger/sink.rs

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::internal::config::WriterTarget;
use crate::internal::error::{LoggingError, Result};

/// Destination for formatted log lines
pub trait LogSink: Send + Sync {
    /// Write one line. `line` carries no trailing newline.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", line)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{}", line)
    }
}

/// Append-only log file.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Open `path` for append, creating it if absent. Parent directories are
    /// not created.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggingError::OpenWriter {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        // One write per line keeps each line append-atomic.
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        (&self.file).write_all(buf.as_bytes())
    }
}

/// Open the destination a writer setting names.
pub fn open_sink(target: &WriterTarget) -> Result<Arc<dyn LogSink>> {
    Ok(match target {
        WriterTarget::Stdout => Arc::new(StdoutSink),
        WriterTarget::Stderr => Arc::new(StderrSink),
        WriterTarget::File(path) => Arc::new(FileSink::open(path)?),
    })
}
