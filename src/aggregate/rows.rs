//! Aggregate view row types
//!
//! Plain structured rows handed to the presentation layer. Every type
//! serializes with its display labels, ready for direct consumption by a
//! charting frontend.

use serde::Serialize;

use crate::models::{AgeGroup, Gender};

/// (diagnosis) -> count, ordered by count descending
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosisCount {
    /// Full, untruncated diagnosis label
    pub diagnosis: String,
    /// Number of matching records
    pub count: usize,
}

/// (diagnosis, sex) -> count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosisSexCount {
    /// Full, untruncated diagnosis label
    pub diagnosis: String,
    /// Patient sex
    pub sex: Gender,
    /// Number of matching records
    pub count: usize,
}

/// (age group, diagnosis) -> count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeGroupDiagnosisCount {
    /// Derived age group
    pub age_group: AgeGroup,
    /// Full, untruncated diagnosis label
    pub diagnosis: String,
    /// Number of matching records
    pub count: usize,
}

/// (age group, sex, diagnosis) -> count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeGroupSexDiagnosisCount {
    /// Derived age group
    pub age_group: AgeGroup,
    /// Patient sex
    pub sex: Gender,
    /// Full, untruncated diagnosis label
    pub diagnosis: String,
    /// Number of matching records
    pub count: usize,
}

/// (sex) -> count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SexCount {
    /// Patient sex
    pub sex: Gender,
    /// Number of matching records
    pub count: usize,
}

/// (age group) -> count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeGroupCount {
    /// Derived age group
    pub age_group: AgeGroup,
    /// Number of matching records
    pub count: usize,
}

/// Five-number age summary for one diagnosis, the data behind a box plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeSummary {
    /// Full, untruncated diagnosis label
    pub diagnosis: String,
    /// Number of records in the group
    pub count: usize,
    /// Youngest age
    pub min: i64,
    /// First quartile
    pub q1: f64,
    /// Median age
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Oldest age
    pub max: i64,
}

/// (sex, age bin) -> count, the data behind an age histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBinSexCount {
    /// Patient sex
    pub sex: Gender,
    /// Inclusive lower edge of the age bin
    pub lower: i64,
    /// Exclusive upper edge of the age bin
    pub upper: i64,
    /// Number of matching records
    pub count: usize,
}
