use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading tables or rendering charts
#[derive(Debug, Error)]
pub enum BenchError {
    /// Input file could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error (missing column, malformed value, ...)
    #[error("failed to decode {}: {source}", path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Table was read but contains no data rows
    #[error("no rows in {}", .0.display())]
    EmptyTable(PathBuf),

    /// Configuration error (invalid chart name, bad dimension, ...)
    #[error("configuration error: {0}")]
    Config(String),

    /// Chart rendering error from the drawing backend
    #[error("render error: {0}")]
    Render(String),
}

/// Type alias for Results using BenchError
pub type Result<T> = std::result::Result<T, BenchError>;
