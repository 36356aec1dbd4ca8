//! Grouped aggregate views over the patient dataset
//!
//! Everything here is a pure function of a loaded [`Dataset`](crate::models::Dataset):
//! the count views consumed by the dashboard charts, the top-diagnoses filter
//! set that scopes the cross-tabulations, age distribution statistics, and a
//! text summary for the command line.

pub mod rows;
pub mod stats;
pub mod summary;
pub mod views;

pub use rows::{
    AgeBinSexCount, AgeGroupCount, AgeGroupDiagnosisCount, AgeGroupSexDiagnosisCount, AgeSummary,
    DiagnosisCount, DiagnosisSexCount, SexCount,
};
pub use stats::{age_histogram_by_sex, age_stats_by_diagnosis};
pub use summary::{generate_summary, DatasetStats};
pub use views::{
    count_by_age_group, count_by_age_group_and_diagnosis, count_by_age_group_sex_diagnosis,
    count_by_diagnosis_and_sex, count_by_sex, top_diagnoses, TopDiagnosisSet,
};
