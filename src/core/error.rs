//! Error types for the calculation core.
//!
//! Input errors are recovered at the CLI boundary and shown to the user.
//! Storage errors are fatal for the current command.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A user-supplied value was rejected before anything was modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// Credit units outside `1..=6`.
    #[error("credit units must be between 1 and 6, got {0}")]
    UnitsOutOfRange(i64),

    /// Exam score outside `0..=100` (or NaN).
    #[error("score must be between 0 and 100, got {0}")]
    ScoreOutOfRange(f64),

    /// A raw text field could not be read as a number.
    #[error("'{value}' is not a valid {field}")]
    NotANumber {
        /// Name of the field shown to the user.
        field: &'static str,
        /// The rejected text.
        value: String,
    },
}

/// The backing record file could not be read, written or understood.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the file failed.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing the file (or creating its directory) failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Deleting the file failed.
    #[error("failed to remove {}: {source}", .path.display())]
    Remove {
        /// File being removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file exists but does not match the record schema.
    #[error("{}:{line}: {reason}", .path.display())]
    Malformed {
        /// File being parsed.
        path: PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// Failure of a store mutation: either the input or the persistence step.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Rejected input; the store is unchanged.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// Persisting failed; the store is unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PlannerError {
    /// Returns `true` if the error came from validation rather than the file system.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
