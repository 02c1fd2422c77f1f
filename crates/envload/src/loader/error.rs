//! Error types for environment file loading.
//!
//! Responsibilities:
//! - Define the failure variants of a load: resolution, open and read.
//!
//! Does NOT handle:
//! - Malformed lines, which are skipped with a warning rather than failing the load.
//!
//! Invariants:
//! - Every variant carries the path it concerns and the underlying I/O error as its source.
//! - Messages never include file contents.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading an environment file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Neither the configured path nor the executable-relative candidate exists.
    ///
    /// `source` is the failure from looking up the configured path directly.
    #[error("Env file not found at {path}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but could not be opened (permissions, etc.).
    #[error("Failed to open env file at {path}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the line stream failed part way through.
    #[error("Failed to read env file at {path} (line {line})")]
    ScanFailed {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// The path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::FileNotFound { path, .. }
            | LoadError::OpenFailed { path, .. }
            | LoadError::ScanFailed { path, .. } => path,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn io_kind(&self) -> ErrorKind {
        match self {
            LoadError::FileNotFound { source, .. }
            | LoadError::OpenFailed { source, .. }
            | LoadError::ScanFailed { source, .. } => source.kind(),
        }
    }
}
