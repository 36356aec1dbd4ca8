//! A Rust library for loading patient diagnosis datasets and computing the
//! grouped demographic aggregates behind an analytical dashboard.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::DatasetConfig;
pub use error::{DatasetError, Result};
pub use loader::{load_dataset, DatasetLoader, SourceFormat};
pub use models::{AgeGroup, Dataset, Gender, PatientRecord};

// Aggregate views
pub use aggregate::{
    age_histogram_by_sex, age_stats_by_diagnosis, count_by_age_group,
    count_by_age_group_and_diagnosis, count_by_age_group_sex_diagnosis, count_by_diagnosis_and_sex,
    count_by_sex, generate_summary, top_diagnoses, AgeBinSexCount, AgeGroupCount,
    AgeGroupDiagnosisCount, AgeGroupSexDiagnosisCount, AgeSummary, DatasetStats, DiagnosisCount,
    DiagnosisSexCount, SexCount, TopDiagnosisSet,
};

// Utility functions
pub use utils::truncate_label;
