//! Logging Setup
//!
//! Installs the global `tracing` subscriber from a [`LoggingConfig`].
//!
//! # Configuration
//!
//! - `level`: filter directive (default `info`); `RUST_LOG` overrides it
//! - `format`: `text` or `json`
//! - `file`: append to this file, or log to stderr when `null`
//!
//! # Usage
//!
//! ```rust,ignore
//! use futures_order_cli::telemetry::init_logging;
//!
//! init_logging(&config.logging)?;
//! ```

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::{LogFormat, LoggingConfig};

/// Logging setup errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The level directive did not parse.
    #[error("Invalid log level '{level}': {message}")]
    InvalidLevel {
        /// Rejected directive.
        level: String,
        /// Parser message.
        message: String,
    },

    /// The log file could not be opened.
    #[error("Failed to open log file '{path}': {source}")]
    OpenFile {
        /// Log file path.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// A global subscriber is already installed.
    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Install the global subscriber. Call once, before any exchange traffic.
///
/// # Errors
///
/// Returns a `TelemetryError` if the level is malformed, the log file
/// cannot be opened, or a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(&config.level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match (&config.file, config.format) {
        (Some(path), LogFormat::Text) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(open_log_file(path)?))
            .try_init(),
        (Some(path), LogFormat::Json) => builder
            .json()
            .with_writer(Mutex::new(open_log_file(path)?))
            .try_init(),
        (None, LogFormat::Text) => builder.with_writer(std::io::stderr).try_init(),
        (None, LogFormat::Json) => builder.json().with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}

/// `RUST_LOG` when set, else the configured directive.
fn build_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(level).map_err(|e| TelemetryError::InvalidLevel {
            level: level.to_string(),
            message: e.to_string(),
        })
    })
}

fn open_log_file(path: &Path) -> Result<File, TelemetryError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TelemetryError::OpenFile {
            path: path.display().to_string(),
            source: e,
        })
}
