use std::io;

use thiserror::Error;

/// Library-wide error type for batkit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure without more specific context.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Directory creation failed.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir { path: String, source: io::Error },

    /// File creation failed.
    #[error("Failed to create file '{path}': {source}")]
    CreateFile { path: String, source: io::Error },
}
