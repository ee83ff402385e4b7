use std::io;

use thiserror::Error;

use crate::font::FontError;

/// Errors that stop the game before or while it runs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load fonts: {0}")]
    Font(#[from] FontError),
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to open log file {path}: {source}")]
    LogFile { path: String, source: io::Error },
}
