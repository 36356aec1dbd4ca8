//! Error handling for dataset loading and aggregation.

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

/// Specialized error type for dataset operations
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Source file missing or unreadable
    #[error("dataset unavailable at {path}: {source}")]
    DataUnavailable {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: io::Error,
    },
    /// A required column is absent from the source schema
    #[error("required column '{column}' not found in source")]
    MissingColumn {
        /// Name of the missing column
        column: &'static str,
    },
    /// A required column carries a type the loader cannot read
    #[error("column '{column}' has unsupported type {actual} (expected {expected})")]
    ColumnType {
        /// Name of the offending column
        column: &'static str,
        /// Type the loader can work with
        expected: &'static str,
        /// Type found in the source
        actual: String,
    },
    /// File extension does not map to a known tabular format
    #[error("unsupported source format: {path}")]
    UnsupportedFormat {
        /// Path with the unrecognized extension
        path: PathBuf,
    },
    /// Error processing Arrow data
    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
    /// Error processing Parquet data
    #[error("parquet error: {0}")]
    Parquet(#[from] ParquetError),
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;
