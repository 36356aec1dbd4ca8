//! Common domain type definitions
//!
//! This module contains the categorical types shared across the dataset and
//! aggregation layers.

use std::fmt;

use serde::Serialize;

/// Gender of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    /// Male gender
    #[serde(rename = "M")]
    Male,
    /// Female gender
    #[serde(rename = "F")]
    Female,
    /// Unknown or not specified
    Unknown,
}

impl Gender {
    /// Display label used in aggregate rows and reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "1" => Self::Male,
            "f" | "female" | "2" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Age group of a patient, derived from the numeric age
///
/// The bins are half-open `[lower, upper)`: `[0,12)` Child, `[12,19)` Teen,
/// `[19,39)` Young Adult, `[39,59)` Adult, `[59,100)` Senior. Ages below 0 or
/// at/above 100 fall into the `Unknown` overflow bucket so that bucket counts
/// always sum to the record total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AgeGroup {
    /// Ages 0-11
    Child,
    /// Ages 12-18
    Teen,
    /// Ages 19-38
    #[serde(rename = "Young Adult")]
    YoungAdult,
    /// Ages 39-58
    Adult,
    /// Ages 59-99
    Senior,
    /// Ages outside the defined bins
    Unknown,
}

impl AgeGroup {
    /// All groups in categorical order, overflow bucket last
    pub const ALL: [Self; 6] = [
        Self::Child,
        Self::Teen,
        Self::YoungAdult,
        Self::Adult,
        Self::Senior,
        Self::Unknown,
    ];

    /// Classify an age into its group
    #[must_use]
    pub const fn from_age(age: i64) -> Self {
        match age {
            0..=11 => Self::Child,
            12..=18 => Self::Teen,
            19..=38 => Self::YoungAdult,
            39..=58 => Self::Adult,
            59..=99 => Self::Senior,
            _ => Self::Unknown,
        }
    }

    /// Display label used in aggregate rows and reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Child => "Child",
            Self::Teen => "Teen",
            Self::YoungAdult => "Young Adult",
            Self::Adult => "Adult",
            Self::Senior => "Senior",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
