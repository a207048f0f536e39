//! Error types for the data-loader crate.
//!
//! Every failure carries enough context (file, line, field) to point at the
//! offending row of the dataset.

use thiserror::Error;

/// Errors that can occur while reading and parsing the TSV datasets
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file was empty, so there was no header line to skip
    #[error("Missing header line in {file}")]
    MissingHeader { file: String },

    /// Line in data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A row had fewer columns than the format requires
    #[error("Expected {expected} fields but found {found} in line {line} of {file}")]
    FieldCountMismatch {
        file: String,
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
