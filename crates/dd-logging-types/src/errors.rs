//! Error types for logging setup.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for dd-logging operations.
///
/// Only configuration calls can fail. Emitting a record never returns an
/// error to the caller.
#[derive(Error, Debug)]
pub enum LogError {
    /// Creating the log directory or opening the log file failed
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        /// Directory or file that could not be created
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// Options file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Level name not in {debug, info, warning, error}
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
}

impl LogError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LogError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_yaml::Error> for LogError {
    fn from(err: serde_yaml::Error) -> Self {
        LogError::Config(err.to_string())
    }
}

/// A specialized Result type for dd-logging operations.
pub type Result<T> = std::result::Result<T, LogError>;
