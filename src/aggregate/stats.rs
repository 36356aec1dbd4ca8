//! Age distribution statistics
//!
//! Distribution-shaped views recovered from the original dashboard: the
//! five-number summaries behind its per-diagnosis box plots and the binned
//! counts behind its age/gender histogram.

use rustc_hash::FxHashMap;

use crate::aggregate::rows::{AgeBinSexCount, AgeSummary};
use crate::aggregate::views::{filtered, TopDiagnosisSet};
use crate::models::{Dataset, Gender};

/// Per-diagnosis age five-number summary
///
/// Groups appear in first-appearance order of their diagnosis. Out-of-range
/// ages are kept: the summary describes the raw ages, not the bucketed ones.
#[must_use]
pub fn age_stats_by_diagnosis(dataset: &Dataset, filter: &TopDiagnosisSet) -> Vec<AgeSummary> {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut groups: Vec<(String, Vec<i64>)> = Vec::new();
    for record in filtered(dataset, filter) {
        if let Some(&slot) = index.get(record.diagnosis.as_str()) {
            groups[slot].1.push(record.age);
        } else {
            index.insert(record.diagnosis.clone(), groups.len());
            groups.push((record.diagnosis.clone(), vec![record.age]));
        }
    }

    groups
        .into_iter()
        .map(|(diagnosis, mut ages)| {
            ages.sort_unstable();
            // groups are non-empty by construction
            AgeSummary {
                diagnosis,
                count: ages.len(),
                min: ages[0],
                q1: quantile(&ages, 0.25),
                median: quantile(&ages, 0.5),
                q3: quantile(&ages, 0.75),
                max: ages[ages.len() - 1],
            }
        })
        .collect()
}

/// (sex, age bin) counts over the full dataset
///
/// Bins are half-open `[lower, lower + bin_width)` aligned to multiples of
/// `bin_width`; only non-empty bins are emitted, sorted by bin start and sex.
#[must_use]
pub fn age_histogram_by_sex(dataset: &Dataset, bin_width: u32) -> Vec<AgeBinSexCount> {
    let width = i64::from(bin_width.max(1));
    let mut counts: FxHashMap<(i64, Gender), usize> = FxHashMap::default();
    for record in dataset.iter() {
        let lower = record.age.div_euclid(width) * width;
        *counts.entry((lower, record.sex)).or_insert(0) += 1;
    }

    let mut rows: Vec<AgeBinSexCount> = counts
        .into_iter()
        .map(|((lower, sex), count)| AgeBinSexCount {
            sex,
            lower,
            upper: lower + width,
            count,
        })
        .collect();
    rows.sort_unstable_by(|a, b| {
        a.lower
            .cmp(&b.lower)
            .then_with(|| a.sex.label().cmp(b.sex.label()))
    });
    rows
}

/// Quantile of a sorted slice via linear interpolation between closest ranks
fn quantile(sorted: &[i64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let position = q * (sorted.len() - 1) as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let lower = sorted[below] as f64;
    let upper = sorted[above] as f64;
    lower + (upper - lower) * (position - below as f64)
}
