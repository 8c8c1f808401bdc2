//! Error types for examplenv operations.
//!
//! This module defines [`ExamplenvError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Malformed env lines are never errors; the transformer passes them through
//! - Per-file read/write failures are collected by the generator, not raised
//! - Use `ExamplenvError::Other` for unexpected errors via `anyhow`

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for examplenv operations.
#[derive(Debug, Error)]
pub enum ExamplenvError {
    /// The directory to scan does not exist.
    #[error("Directory {path} does not exist")]
    DirectoryNotFound { path: PathBuf },

    /// The path to scan exists but is not a directory.
    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// An env file could not be read.
    #[error("Error reading {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An example file could not be written.
    #[error("Error writing {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for examplenv operations.
pub type Result<T> = std::result::Result<T, ExamplenvError>;
