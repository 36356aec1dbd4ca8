//! Domain models for the patient diagnosis dataset

pub mod dataset;
pub mod patient;
pub mod types;

pub use dataset::Dataset;
pub use patient::PatientRecord;
pub use types::{AgeGroup, Gender};
