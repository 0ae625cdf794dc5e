//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for regroup operations
#[derive(Debug, Error)]
pub enum Error {
    /// File could not be opened or read
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed tabular input
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Internal pair construction defect
    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Structural problems in the input table.
///
/// Row numbers are 1-based lines of the table (the header is row 1), so a
/// user can find and fix the offending cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("input contains zero rows")]
    Empty,

    #[error("invalid row {row}: expected {expected} cells, found {actual}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("failed to find {0} column")]
    MissingColumn(String),

    #[error("row {row}, column {column:?}: group ID {value:?} is not an integer")]
    InvalidGroupId {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}, column {column:?}: member ID {value:?} is not an integer")]
    InvalidMemberId {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: name {name:?} already appears in row {first_row}")]
    DuplicateName {
        row: usize,
        first_row: usize,
        name: String,
    },

    #[error("failed to decode CSV: {0}")]
    Csv(String),
}

/// Pair construction failures. Unreachable for groups produced by the
/// builder; seeing one means a bug, not bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("invalid pair because length is not 2, actual {len}")]
    MalformedPair { len: usize },

    #[error("member {0:?} cannot be paired with itself")]
    SelfPair(String),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors a user can fix by editing the input file.
    pub fn is_user_fixable(&self) -> bool {
        matches!(self, Self::Format(_) | Self::Config(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
