//! Patient source schema definitions

use arrow::datatypes::{DataType, Field, Schema};
use std::sync::Arc;

/// Numeric age column
pub const COL_AGE: &str = "AGE";
/// Sex column, small enumerated string domain
pub const COL_SEX: &str = "SEX";
/// Free-text diagnosis label column
pub const COL_DIAGNOSIS: &str = "label_text";
/// Optional precomputed age-group column; ignored on load and always recomputed
pub const COL_AGE_GROUP: &str = "Age Group";

/// Get the Arrow schema for the patient source
///
/// The source carries one diagnosis row per patient encounter. `Age Group`
/// may be present in exported files but is never trusted by the loader.
pub fn patient_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(COL_AGE, DataType::Int64, true),
        Field::new(COL_SEX, DataType::Utf8, true),
        Field::new(COL_DIAGNOSIS, DataType::Utf8, true),
        Field::new(COL_AGE_GROUP, DataType::Utf8, true),
    ]))
}
