//! Error types for mdwclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while counting and reporting
#[derive(Error, Debug)]
pub enum MdwcError {
    /// Failed to read a file, or its contents were not valid UTF-8
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write an output artifact
    #[error("failed to write '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("failed to walk '{path}': {message}")]
    Walk { path: PathBuf, message: String },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
