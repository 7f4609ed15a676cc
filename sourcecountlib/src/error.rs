//! Error types for sourcecountlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, selecting or exporting count results.
///
/// An `Unknown` file type is valid data and never surfaces here.
#[derive(Error, Debug)]
pub enum SourceCountError {
    /// Failed to read a snapshot file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Snapshot content is not a valid list of count records
    #[error("invalid snapshot '{path}': {source}")]
    Snapshot {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Column name that does not match any defined column
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// Failure reported by an external collaborator (editor, clipboard)
    #[error("{0}")]
    Collaborator(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
