use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for FontGuard
///
/// Only structural failures end up here. A font that parses but fails a
/// licensing check is reported through the verdict, never as an `Error`.
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The bytes are not a font the parser understands
    #[error("Font parsing error: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),
    /// Invalid file or directory path
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
    /// Report serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Batch processing errors
    #[error("Batch processing error: {0}")]
    Batch(String),
}

/// Result type alias for FontGuard operations
pub type Result<T> = std::result::Result<T, Error>;
