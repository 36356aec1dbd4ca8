//! Grouped count views over the patient dataset
//!
//! Pure functions of the loaded dataset: no I/O, no mutation, deterministic
//! output. Multi-key views emit rows in first-appearance order of their key
//! tuple so chart series stay stable across reloads; the top-diagnoses view
//! is explicitly sorted instead.

use std::hash::Hash;

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::aggregate::rows::{
    AgeGroupCount, AgeGroupDiagnosisCount, AgeGroupSexDiagnosisCount, DiagnosisCount,
    DiagnosisSexCount, SexCount,
};
use crate::models::{AgeGroup, Dataset, PatientRecord};

/// The most frequent diagnosis labels, used to scope the cross-tabulated views
///
/// Membership is tested against full, untruncated labels. Filtering with the
/// same set is idempotent: records that already passed the filter pass it
/// again unchanged.
#[derive(Debug, Clone, Default)]
pub struct TopDiagnosisSet {
    labels: FxHashSet<String>,
}

impl TopDiagnosisSet {
    /// Build the set from the output of [`top_diagnoses`]
    #[must_use]
    pub fn from_counts(counts: &[DiagnosisCount]) -> Self {
        Self {
            labels: counts.iter().map(|row| row.diagnosis.clone()).collect(),
        }
    }

    /// Whether a diagnosis label is a member
    #[must_use]
    pub fn contains(&self, diagnosis: &str) -> bool {
        self.labels.contains(diagnosis)
    }

    /// Number of labels in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// The `n` most frequent diagnoses, count descending
///
/// Ties are broken by ascending label so the selection is deterministic.
/// Every returned count is at least as large as the count of any diagnosis
/// left out.
#[must_use]
pub fn top_diagnoses(dataset: &Dataset, n: usize) -> Vec<DiagnosisCount> {
    let mut rows: Vec<DiagnosisCount> = dataset
        .iter()
        .map(|record| record.diagnosis.as_str())
        .counts()
        .into_iter()
        .map(|(diagnosis, count)| DiagnosisCount {
            diagnosis: diagnosis.to_string(),
            count,
        })
        .collect();
    rows.sort_unstable_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.diagnosis.cmp(&b.diagnosis))
    });
    rows.truncate(n);
    rows
}

/// (diagnosis, sex) counts over records whose diagnosis is in the filter set
#[must_use]
pub fn count_by_diagnosis_and_sex(
    dataset: &Dataset,
    filter: &TopDiagnosisSet,
) -> Vec<DiagnosisSexCount> {
    grouped_counts(filtered(dataset, filter).map(|record| (record.diagnosis.clone(), record.sex)))
        .into_iter()
        .map(|((diagnosis, sex), count)| DiagnosisSexCount {
            diagnosis,
            sex,
            count,
        })
        .collect()
}

/// (age group, diagnosis) counts over records whose diagnosis is in the filter set
#[must_use]
pub fn count_by_age_group_and_diagnosis(
    dataset: &Dataset,
    filter: &TopDiagnosisSet,
) -> Vec<AgeGroupDiagnosisCount> {
    grouped_counts(
        filtered(dataset, filter).map(|record| (record.age_group, record.diagnosis.clone())),
    )
    .into_iter()
    .map(|((age_group, diagnosis), count)| AgeGroupDiagnosisCount {
        age_group,
        diagnosis,
        count,
    })
    .collect()
}

/// (age group, sex, diagnosis) counts over records whose diagnosis is in the filter set
#[must_use]
pub fn count_by_age_group_sex_diagnosis(
    dataset: &Dataset,
    filter: &TopDiagnosisSet,
) -> Vec<AgeGroupSexDiagnosisCount> {
    grouped_counts(
        filtered(dataset, filter)
            .map(|record| (record.age_group, record.sex, record.diagnosis.clone())),
    )
    .into_iter()
    .map(|((age_group, sex, diagnosis), count)| AgeGroupSexDiagnosisCount {
        age_group,
        sex,
        diagnosis,
        count,
    })
    .collect()
}

/// Sex counts over the full dataset
#[must_use]
pub fn count_by_sex(dataset: &Dataset) -> Vec<SexCount> {
    grouped_counts(dataset.iter().map(|record| record.sex))
        .into_iter()
        .map(|(sex, count)| SexCount { sex, count })
        .collect()
}

/// Age-group counts over the full dataset
///
/// Emits all six buckets in categorical order, zeros included, so the bucket
/// counts always sum to the record total.
#[must_use]
pub fn count_by_age_group(dataset: &Dataset) -> Vec<AgeGroupCount> {
    let mut counts = [0usize; AgeGroup::ALL.len()];
    for record in dataset.iter() {
        counts[record.age_group as usize] += 1;
    }
    AgeGroup::ALL
        .iter()
        .map(|&age_group| AgeGroupCount {
            age_group,
            count: counts[age_group as usize],
        })
        .collect()
}

/// Records whose diagnosis is a member of the filter set, in dataset order
pub(crate) fn filtered<'a>(
    dataset: &'a Dataset,
    filter: &'a TopDiagnosisSet,
) -> impl Iterator<Item = &'a PatientRecord> {
    dataset
        .iter()
        .filter(move |record| filter.contains(&record.diagnosis))
}

/// Count keys, keeping first-appearance order
pub(crate) fn grouped_counts<K>(keys: impl Iterator<Item = K>) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
{
    let mut index: FxHashMap<K, usize> = FxHashMap::default();
    let mut rows: Vec<(K, usize)> = Vec::new();
    for key in keys {
        if let Some(&slot) = index.get(&key) {
            rows[slot].1 += 1;
        } else {
            index.insert(key.clone(), rows.len());
            rows.push((key, 1));
        }
    }
    rows
}
