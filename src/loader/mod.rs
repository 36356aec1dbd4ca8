//! Patient dataset loading
//!
//! Reads the tabular source file (CSV or Parquet) into Arrow record batches,
//! extracts typed patient records from them, and caches the loaded dataset so
//! repeated requests share a single in-memory copy.

use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::record_batch::RecordBatch;
use log::{debug, info, warn};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ProjectionMask;

use crate::config::DatasetConfig;
use crate::error::{DatasetError, Result};
use crate::models::Dataset;
use crate::schema::{COL_AGE, COL_DIAGNOSIS, COL_SEX};

mod extract;

pub use extract::records_from_batches;

/// How many rows the CSV schema inference examines
const SCHEMA_INFER_MAX_RECORDS: usize = 1000;

/// Tabular formats the loader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Apache Parquet
    Parquet,
}

impl SourceFormat {
    /// Detect the source format from the file extension
    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("parquet" | "pq") => Ok(Self::Parquet),
            _ => Err(DatasetError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Load the dataset described by the configuration
///
/// Reads all rows from the source, extracts patient records with the
/// tolerant skip-and-count policy, and derives age groups. This is the
/// uncached entry point; most callers go through [`DatasetLoader`].
pub fn load_dataset(config: &DatasetConfig) -> Result<Dataset> {
    let batches = read_batches(&config.path, config.batch_size)?;
    let (records, skipped) = records_from_batches(&batches)?;
    if skipped > 0 {
        warn!(
            "skipped {skipped} malformed rows while loading {}",
            config.path.display()
        );
    }
    info!(
        "loaded {} patient records from {}",
        records.len(),
        config.path.display()
    );
    Ok(Dataset::new(records, skipped))
}

/// Read the source file into Arrow record batches
pub fn read_batches(path: &Path, batch_size: usize) -> Result<Vec<RecordBatch>> {
    match SourceFormat::detect(path)? {
        SourceFormat::Csv => read_csv(path, batch_size),
        SourceFormat::Parquet => read_parquet(path, batch_size),
    }
}

fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| DatasetError::DataUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a CSV file with a header row, inferring the column types
fn read_csv(path: &Path, batch_size: usize) -> Result<Vec<RecordBatch>> {
    let mut file = open_source(path)?;

    let format = Format::default().with_header(true);
    let (schema, _) = format.infer_schema(&mut file, Some(SCHEMA_INFER_MAX_RECORDS))?;
    file.rewind().map_err(|source| DatasetError::DataUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_header(true)
        .with_batch_size(batch_size)
        .build(file)?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }
    Ok(batches)
}

/// Read a Parquet file, projecting to the patient columns
fn read_parquet(path: &Path, batch_size: usize) -> Result<Vec<RecordBatch>> {
    let file = open_source(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

    // Project the patient columns that exist in the file; extraction reports
    // anything that is missing.
    let file_schema = Arc::clone(builder.schema());
    let mut projection = Vec::new();
    for name in [COL_AGE, COL_SEX, COL_DIAGNOSIS] {
        match file_schema.index_of(name) {
            Ok(idx) => projection.push(idx),
            Err(_) => warn!("column {name} not found in {}", path.display()),
        }
    }

    let reader = if projection.is_empty() {
        builder.with_batch_size(batch_size).build()?
    } else {
        let mask = ProjectionMask::roots(builder.parquet_schema(), projection);
        builder
            .with_projection(mask)
            .with_batch_size(batch_size)
            .build()?
    };

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }
    Ok(batches)
}

/// Caching loader service
///
/// Owns the dataset configuration and a single optional cached dataset. The
/// cache guard is held across the load: concurrent callers observe
/// at-most-one real load per cache fill and share the resulting [`Arc`] to
/// the immutable dataset.
#[derive(Debug)]
pub struct DatasetLoader {
    config: DatasetConfig,
    cache: Mutex<Option<Arc<Dataset>>>,
}

impl DatasetLoader {
    /// Create a loader for the given configuration
    #[must_use]
    pub fn new(config: DatasetConfig) -> Self {
        Self {
            config,
            cache: Mutex::new(None),
        }
    }

    /// The configuration this loader reads from
    #[must_use]
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Return the cached dataset, loading it on first request
    ///
    /// Load failures are surfaced to the caller and leave the cache empty, so
    /// a later call retries the read.
    pub fn load(&self) -> Result<Arc<Dataset>> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(dataset) = cache.as_ref() {
            debug!("returning cached dataset for {}", self.config.path.display());
            return Ok(Arc::clone(dataset));
        }
        let dataset = Arc::new(load_dataset(&self.config)?);
        *cache = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Drop the cached dataset so the next request reloads from the source
    pub fn invalidate(&self) {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if cache.take().is_some() {
            info!("invalidated cached dataset for {}", self.config.path.display());
        }
    }

    /// Whether a dataset is currently cached
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
