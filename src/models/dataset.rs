//! Loaded patient dataset

use serde::Serialize;

use crate::models::patient::PatientRecord;

/// An immutable, fully loaded patient dataset
///
/// Holds the retained records in source order plus the number of source rows
/// that were skipped as malformed, so callers can account for every input
/// row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    records: Vec<PatientRecord>,
    skipped_rows: usize,
}

impl Dataset {
    /// Create a dataset from loaded records
    #[must_use]
    pub fn new(records: Vec<PatientRecord>, skipped_rows: usize) -> Self {
        Self {
            records,
            skipped_rows,
        }
    }

    /// The retained records, in source order
    #[must_use]
    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    /// Number of retained records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of source rows skipped as malformed during loading
    #[must_use]
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Iterate over the retained records
    pub fn iter(&self) -> impl Iterator<Item = &PatientRecord> {
        self.records.iter()
    }
}
