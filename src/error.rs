//! Application-wide error types using thiserror
//!
//! Only start-up can fail: a bad configuration file or an unreadable path.
//! Quote fetch failures never reach this level (see `adapters::errors`).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
