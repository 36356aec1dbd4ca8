//! Dataset statistics and text summary
//!
//! Computes headline statistics for a loaded dataset and renders them as a
//! human-readable report for the command-line shell.

use itertools::Itertools;
use serde::Serialize;

use crate::aggregate::rows::{AgeGroupCount, DiagnosisCount, SexCount};
use crate::aggregate::views::{count_by_age_group, count_by_sex};
use crate::models::Dataset;
use crate::utils::truncate_label;

/// Headline statistics for a loaded dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetStats {
    /// Number of retained records
    pub total_records: usize,
    /// Number of source rows skipped as malformed
    pub skipped_rows: usize,
    /// Number of distinct diagnosis labels
    pub distinct_diagnoses: usize,
    /// Record counts per sex
    pub sex_counts: Vec<SexCount>,
    /// Record counts per age group, all buckets
    pub age_group_counts: Vec<AgeGroupCount>,
}

impl DatasetStats {
    /// Calculate statistics for a dataset
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let distinct_diagnoses = dataset
            .iter()
            .map(|record| record.diagnosis.as_str())
            .unique()
            .count();
        Self {
            total_records: dataset.len(),
            skipped_rows: dataset.skipped_rows(),
            distinct_diagnoses,
            sex_counts: count_by_sex(dataset),
            age_group_counts: count_by_age_group(dataset),
        }
    }
}

/// Render a text report from the statistics and the top-diagnoses view
///
/// Long diagnosis labels are truncated for display; the counts come from the
/// full labels.
#[must_use]
pub fn generate_summary(stats: &DatasetStats, top: &[DiagnosisCount]) -> String {
    let mut summary = String::new();
    summary.push_str("Patient Dataset Summary:\n");
    summary.push_str(&format!("  Total Records: {}\n", stats.total_records));
    summary.push_str(&format!("  Skipped Rows: {}\n", stats.skipped_rows));
    summary.push_str(&format!(
        "  Distinct Diagnoses: {}\n",
        stats.distinct_diagnoses
    ));

    summary.push_str("\nRecords by Sex:\n");
    for row in &stats.sex_counts {
        let percentage = percentage_of(row.count, stats.total_records);
        summary.push_str(&format!(
            "  {}: {} ({percentage:.1}%)\n",
            row.sex, row.count
        ));
    }

    summary.push_str("\nRecords by Age Group:\n");
    for row in &stats.age_group_counts {
        let percentage = percentage_of(row.count, stats.total_records);
        summary.push_str(&format!(
            "  {}: {} ({percentage:.1}%)\n",
            row.age_group, row.count
        ));
    }

    if !top.is_empty() {
        summary.push_str(&format!("\nTop {} Diagnoses:\n", top.len()));
        for row in top {
            summary.push_str(&format!(
                "  {}: {}\n",
                truncate_label(&row.diagnosis),
                row.count
            ));
        }
    }

    summary
}

fn percentage_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * 100.0
    }
}
