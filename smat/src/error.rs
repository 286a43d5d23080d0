//! Error type for file-backed matrix operations

use std::io;
use std::path::PathBuf;

use smat_core::{ErrorCategory, MatrixError};
use thiserror::Error;

/// Errors raised by the I/O layer and host session
#[derive(Error, Debug)]
pub enum Error {
    /// Dimension, format, parse or bounds error from the core
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// Matrix error tied to the file it came from
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: MatrixError,
    },

    /// The file could not be opened, read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configured result directory is missing or is a file
    #[error("{} is not a directory or does not exist.", path.display())]
    NotADirectory { path: PathBuf },

    /// JSON encoding of a result failed
    #[cfg(feature = "serde")]
    #[error("JSON error on {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn in_file(path: impl Into<PathBuf>, source: MatrixError) -> Self {
        Error::InFile {
            path: path.into(),
            source,
        }
    }

    /// Coarse category, for hosts that branch on the kind of failure
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Matrix(err) | Error::InFile { source: err, .. } => err.category(),
            Error::Io { .. } | Error::NotADirectory { .. } => ErrorCategory::Io,
            #[cfg(feature = "serde")]
            Error::Json { source, .. } if source.is_io() => ErrorCategory::Io,
            #[cfg(feature = "serde")]
            Error::Json { .. } => ErrorCategory::Format,
        }
    }

    /// The underlying core error, if any
    pub fn matrix_error(&self) -> Option<MatrixError> {
        match self {
            Error::Matrix(err) | Error::InFile { source: err, .. } => Some(*err),
            _ => None,
        }
    }
}

/// Result type for file-backed operations
pub type Result<T> = std::result::Result<T, Error>;
