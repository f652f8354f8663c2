use std::io;
use thiserror::Error;

use crate::config::settings::ConfigError;

/// Top-level application error for startup and the terminal session
///
/// Request failures never reach this type; they are `JobError`s rendered in
/// the output area of the tab that started them.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
