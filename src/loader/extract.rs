//! Typed record extraction from Arrow batches
//!
//! Converts record batches into [`PatientRecord`]s by column name, adapting
//! the age column across the numeric and string types the sources produce in
//! practice. Malformed rows are skipped and counted rather than failing the
//! whole load; each skip is logged at warn level with its reason.

use arrow::array::{Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use log::warn;

use crate::error::{DatasetError, Result};
use crate::models::{Gender, PatientRecord};
use crate::schema::{COL_AGE, COL_DIAGNOSIS, COL_SEX};

/// Extract patient records from record batches
///
/// Returns the retained records in batch order together with the number of
/// rows skipped as malformed.
pub fn records_from_batches(batches: &[RecordBatch]) -> Result<(Vec<PatientRecord>, usize)> {
    let total_rows: usize = batches.iter().map(RecordBatch::num_rows).sum();
    let mut records = Vec::with_capacity(total_rows);
    let mut skipped = 0;
    let mut row_offset = 0;
    for batch in batches {
        extract_batch(batch, row_offset, &mut records, &mut skipped)?;
        row_offset += batch.num_rows();
    }
    Ok((records, skipped))
}

fn extract_batch(
    batch: &RecordBatch,
    row_offset: usize,
    records: &mut Vec<PatientRecord>,
    skipped: &mut usize,
) -> Result<()> {
    let ages = AgeColumn::from_batch(batch)?;
    let sexes = string_column(batch, COL_SEX)?;
    let labels = string_column(batch, COL_DIAGNOSIS)?;

    for row in 0..batch.num_rows() {
        let Some(age) = ages.value(row) else {
            warn!("skipping row {}: missing or non-numeric AGE", row_offset + row);
            *skipped += 1;
            continue;
        };

        if sexes.is_null(row) {
            warn!("skipping row {}: missing SEX", row_offset + row);
            *skipped += 1;
            continue;
        }
        let sex = Gender::from(sexes.value(row));
        if sex == Gender::Unknown {
            warn!(
                "skipping row {}: unrecognized sex code '{}'",
                row_offset + row,
                sexes.value(row)
            );
            *skipped += 1;
            continue;
        }

        let diagnosis = if labels.is_null(row) {
            ""
        } else {
            labels.value(row).trim()
        };
        if diagnosis.is_empty() {
            warn!("skipping row {}: empty diagnosis label", row_offset + row);
            *skipped += 1;
            continue;
        }

        records.push(PatientRecord::new(age, sex, diagnosis.to_string()));
    }
    Ok(())
}

fn string_column<'a>(batch: &'a RecordBatch, column: &'static str) -> Result<&'a StringArray> {
    let idx = batch
        .schema()
        .index_of(column)
        .map_err(|_| DatasetError::MissingColumn { column })?;
    let array = batch.column(idx);
    array
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| DatasetError::ColumnType {
            column,
            expected: "Utf8",
            actual: array.data_type().to_string(),
        })
}

/// Age column adapted to the representations seen across sources: integer
/// columns from Parquet, and integer, float, or string columns from CSV
/// inference (a single stray token turns the whole CSV column into strings).
enum AgeColumn<'a> {
    Int64(&'a Int64Array),
    Int32(&'a Int32Array),
    Float64(&'a Float64Array),
    Utf8(&'a StringArray),
}

impl<'a> AgeColumn<'a> {
    fn from_batch(batch: &'a RecordBatch) -> Result<Self> {
        let idx = batch
            .schema()
            .index_of(COL_AGE)
            .map_err(|_| DatasetError::MissingColumn { column: COL_AGE })?;
        let array = batch.column(idx);
        let adapted = match array.data_type() {
            DataType::Int64 => array.as_any().downcast_ref::<Int64Array>().map(Self::Int64),
            DataType::Int32 => array.as_any().downcast_ref::<Int32Array>().map(Self::Int32),
            DataType::Float64 => array
                .as_any()
                .downcast_ref::<Float64Array>()
                .map(Self::Float64),
            DataType::Utf8 => array.as_any().downcast_ref::<StringArray>().map(Self::Utf8),
            _ => None,
        };
        adapted.ok_or_else(|| DatasetError::ColumnType {
            column: COL_AGE,
            expected: "integer",
            actual: array.data_type().to_string(),
        })
    }

    /// Age at `row`, or `None` when the value is null or not a whole number
    fn value(&self, row: usize) -> Option<i64> {
        match self {
            Self::Int64(array) => (!array.is_null(row)).then(|| array.value(row)),
            Self::Int32(array) => (!array.is_null(row)).then(|| i64::from(array.value(row))),
            Self::Float64(array) => {
                if array.is_null(row) {
                    return None;
                }
                let value = array.value(row);
                if !value.is_finite() || value.fract() != 0.0 {
                    return None;
                }
                Some(value as i64)
            }
            Self::Utf8(array) => {
                if array.is_null(row) {
                    return None;
                }
                array.value(row).trim().parse().ok()
            }
        }
    }
}
