use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediadexError {
    // Per-file I/O errors
    #[error("Failed to read metadata for {path}: {source}")]
    FileMetadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Date handling
    #[error("Date formatting error: {0}")]
    DateFormat(#[from] time::error::Format),
}

/// Result type for mediadex operations.
pub type Result<T> = std::result::Result<T, MediadexError>;
