//! Error types for file-backed matrix operations

use std::path::PathBuf;

use smtx_core::{FormatError, ShapeError};
use thiserror::Error;

/// Result type alias using smtx's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by loading, computing over, and saving matrices
///
/// All of these are terminal for the operation that raised them; nothing
/// is retried internally and no partial result is produced.
#[derive(Error, Debug)]
pub enum Error {
    /// Source file missing or unreadable at the filesystem level
    #[error("matrix file not found: {}", .path.display())]
    NotFound {
        /// The offending path
        path: PathBuf,
    },

    /// The file was read but its content is not a valid matrix document
    #[error("{}: {}", .path.display(), .source)]
    Format {
        /// Path of the malformed document
        path: PathBuf,
        /// The precise violation, with line context
        #[source]
        source: FormatError,
    },

    /// Operand shapes are incompatible for the requested operation
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Writing the result document failed
    #[error("failed to write {}: {}", .path.display(), .source)]
    Io {
        /// Path of the attempted write
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },
}

/// Coarse error classification, e.g. for mapping to process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or unreadable input file
    NotFound,
    /// Malformed document content
    Format,
    /// Incompatible operand shapes
    Shape,
    /// Failed result write
    Io,
}

impl Error {
    /// The category this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::NotFound { .. } => ErrorCategory::NotFound,
            Error::Format { .. } => ErrorCategory::Format,
            Error::Shape(_) => ErrorCategory::Shape,
            Error::Io { .. } => ErrorCategory::Io,
        }
    }

    /// Process exit code a front end can surface for this error
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::NotFound => 2,
            ErrorCategory::Format => 3,
            ErrorCategory::Shape => 4,
            ErrorCategory::Io => 5,
        }
    }
}
