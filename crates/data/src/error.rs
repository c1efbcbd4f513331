//! Data loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a dataset file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be opened
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header
    #[error("Column '{column}' not found in header")]
    MissingColumn { column: String },

    /// No usable rows remained after filtering
    #[error("No usable observations found")]
    NoData,

    /// Unknown dataset name
    #[error("Unknown metric '{0}': expected 'conversion' or 'area'")]
    UnknownMetric(String),
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, LoadError>;
