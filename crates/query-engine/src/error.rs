//! Error types for query execution.
//!
//! An empty result is not an error: queries render "No match found!" (or the
//! lookup miss lines) themselves. These variants cover commands that cannot
//! be run at all.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    /// A numeric argument or field did not parse
    #[error("Malformed {field}: {value:?}")]
    MalformedInput { field: String, value: String },

    #[error("{command} expects {expected} argument(s) but got {found}")]
    MissingArgument {
        command: String,
        expected: usize,
        found: usize,
    },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QueryError>;

/// Parse a numeric command argument, naming the argument on failure
pub(crate) fn parse_arg<T: std::str::FromStr>(field: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| QueryError::MalformedInput {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parse a result-count cap. A negative cap never triggers, so it means
/// "no limit".
pub(crate) fn parse_cap(field: &str, value: &str) -> Result<usize> {
    let cap: i64 = parse_arg(field, value)?;
    Ok(usize::try_from(cap).unwrap_or(usize::MAX))
}
