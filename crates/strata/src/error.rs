//! # Error Types
//!
//! Everything below the facade is total. Only reading configuration can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up the streaming core.
#[derive(Error, Debug)]
pub enum StrataError {
    /// Configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration text is not valid TOML for this schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for STRATA operations.
pub type StrataResult<T> = Result<T, StrataError>;
