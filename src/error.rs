use thiserror::Error;

use crate::config::City;

/// Convenience result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned while reading a city's trip file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV framing or deserialization error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The file does not carry the columns a trip record needs.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A cell could not be parsed into its trip field.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

impl LoadError {
    /// Returns `true` when the failure means the file itself could not be found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            Self::Csv(err) => matches!(
                err.kind(),
                csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound
            ),
            _ => false,
        }
    }
}

/// Errors surfaced by an exploration session.
#[derive(Debug, Error)]
pub enum ExploreError {
    /// The backing file for a city is missing or unreadable. The session reports it and
    /// returns to filter selection.
    #[error("data for {city} is unavailable: {source}")]
    DataUnavailable {
        city: City,
        #[source]
        source: LoadError,
    },

    /// Reading from or writing to the console failed.
    #[error("console error: {0}")]
    Console(#[from] std::io::Error),
}
