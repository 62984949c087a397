use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for lapwatch
///
/// Only the application edge can fail. The stopwatch core itself has no
/// error cases.
#[derive(Debug, Error)]
pub enum LapwatchError {
    #[error("Invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Debug logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
