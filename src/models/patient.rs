//! Patient record model

use serde::Serialize;

use crate::models::types::{AgeGroup, Gender};

/// One row of the patient diagnosis dataset
///
/// Records are immutable once constructed. The age group is always derived
/// from the age in the constructor; any age-group column present in the
/// source is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientRecord {
    /// Age in whole years
    pub age: i64,
    /// Patient sex
    pub sex: Gender,
    /// Free-text diagnosis label
    pub diagnosis: String,
    /// Age group derived from `age`
    pub age_group: AgeGroup,
}

impl PatientRecord {
    /// Create a record, deriving the age group from the age
    #[must_use]
    pub fn new(age: i64, sex: Gender, diagnosis: String) -> Self {
        Self {
            age,
            sex,
            diagnosis,
            age_group: AgeGroup::from_age(age),
        }
    }
}
