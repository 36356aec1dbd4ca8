//! Configuration for dataset loading.

use std::path::PathBuf;

/// Configuration for the dataset loader
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Path to the tabular source file (CSV or Parquet)
    pub path: PathBuf,
    /// How many of the most frequent diagnoses scope the cross-tabulated views
    pub top_n: usize,
    /// Batch size for reading the source file
    pub batch_size: usize,
}

impl DatasetConfig {
    /// Create a configuration for the given source path, keeping the defaults
    /// for everything else.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("df_sample.csv"),
            top_n: 15,
            batch_size: 8192,
        }
    }
}
