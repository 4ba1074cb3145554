//! Error types for diary core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing messages. Callers discriminate failures through
//! [`DiaryError::kind`] rather than by matching message text.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for diary operations.
pub type Result<T> = std::result::Result<T, DiaryError>;

/// Coarse classification of a [`DiaryError`].
///
/// Front ends render each kind differently: a wrong password, a filesystem
/// failure and a corrupt entry must never look alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed ciphertext, unusable key, or failed padding check.
    Crypto,
    /// Decrypted content is not a valid entry record.
    Format,
    /// Filesystem read, write or directory creation failed.
    Io,
    /// Bad configuration or arguments supplied by the caller.
    InvalidInput,
}

/// The store operation that was running when an I/O error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Save,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Load => write!(f, "loading"),
            Operation::Save => write!(f, "saving"),
        }
    }
}

/// Core error type for diary operations.
#[derive(Debug, Error)]
pub enum DiaryError {
    /// Encryption or decryption error (usually a wrong password)
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Entry content could not be parsed
    #[error("Format error: {0}")]
    Format(String),

    /// Filesystem error, with the entry date and operation for context
    #[error("I/O error while {operation} entry for {date} ({}): {source}", path.display())]
    Io {
        operation: Operation,
        date: NaiveDate,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DiaryError {
    /// Build an I/O error carrying the date, operation and path involved.
    pub fn io(
        operation: Operation,
        date: NaiveDate,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        DiaryError::Io {
            operation,
            date,
            path: path.into(),
            source,
        }
    }

    /// The tagged kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DiaryError::Crypto(_) => ErrorKind::Crypto,
            DiaryError::Format(_) => ErrorKind::Format,
            DiaryError::Io { .. } => ErrorKind::Io,
            DiaryError::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}

impl From<serde_json::Error> for DiaryError {
    fn from(err: serde_json::Error) -> Self {
        DiaryError::Format(err.to_string())
    }
}
