//! Error types for gazetteer loading.

use std::path::PathBuf;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, GazetteerError>;

/// Failures while loading the reference tables. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum GazetteerError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required header is absent
    #[error("column '{column}' not found in {}", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    /// A key column is blank on some row
    #[error("blank '{column}' on line {line} of {}", path.display())]
    MissingField {
        path: PathBuf,
        column: &'static str,
        line: u64,
    },
}
