//! Structured logging.
//!
//! # Responsibilities
//! - Console layer on stderr, filtered by `RUST_LOG` or the configured level
//! - Optional append-only file sink capturing DEBUG and above
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - The sink is a value the binary opens and passes in; `init` never
//!   reaches for a file on its own
//! - No rotation or size management of the file

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::{
    filter::{LevelFilter, ParseError},
    fmt,
    prelude::*,
    util::TryInitError,
    EnvFilter,
};

use crate::config::ObservabilityConfig;

/// Error raised while setting up logging.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("failed to install subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// An append-only log file.
#[derive(Debug, Clone)]
pub struct LogSink {
    path: PathBuf,
    file: Arc<File>,
}

impl LogSink {
    /// Open (or create) `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Arc::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush anything the OS still buffers for the file.
    pub fn sync(&self) -> std::io::Result<()> {
        self.file.sync_data()
    }

    fn writer(&self) -> Arc<File> {
        self.file.clone()
    }
}

/// Console filter: `RUST_LOG` wins, otherwise the configured level.
pub fn console_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ParseError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level),
    }
}

/// Build the subscriber without installing it.
pub fn build_subscriber(
    config: &ObservabilityConfig,
    sink: Option<&LogSink>,
) -> Result<impl Subscriber + Send + Sync + 'static, LoggingError> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_filter(config)?);

    let file = sink.map(|sink| {
        fmt::layer()
            .with_ansi(false)
            .with_writer(sink.writer())
            .with_filter(LevelFilter::DEBUG)
    });

    Ok(tracing_subscriber::registry().with(console).with(file))
}

/// Install the process subscriber.
pub fn init(config: &ObservabilityConfig, sink: Option<&LogSink>) -> Result<(), LoggingError> {
    build_subscriber(config, sink)?.try_init()?;
    Ok(())
}
