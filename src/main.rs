use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use log::info;

use diag_stats::{
    age_histogram_by_sex, age_stats_by_diagnosis, count_by_age_group,
    count_by_age_group_and_diagnosis, count_by_age_group_sex_diagnosis, count_by_diagnosis_and_sex,
    count_by_sex, generate_summary, top_diagnoses, DatasetConfig, DatasetLoader, DatasetStats,
    TopDiagnosisSet,
};

/// Histogram bin width used for the JSON surface
const HISTOGRAM_BIN_WIDTH: u32 = 5;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut json = false;
    let mut path: Option<PathBuf> = None;
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            path = Some(PathBuf::from(arg));
        }
    }

    let config = path.map_or_else(DatasetConfig::default, DatasetConfig::new);
    info!("loading patient dataset from: {}", config.path.display());

    let loader = DatasetLoader::new(config);
    let start = Instant::now();
    let dataset = loader.load().context("loading patient dataset")?;
    info!(
        "loaded {} records ({} skipped) in {:?}",
        dataset.len(),
        dataset.skipped_rows(),
        start.elapsed()
    );

    let top = top_diagnoses(&dataset, loader.config().top_n);
    let filter = TopDiagnosisSet::from_counts(&top);

    if json {
        let views = serde_json::json!({
            "top_diagnoses": top,
            "diagnosis_by_sex": count_by_diagnosis_and_sex(&dataset, &filter),
            "age_group_by_diagnosis": count_by_age_group_and_diagnosis(&dataset, &filter),
            "age_group_sex_diagnosis": count_by_age_group_sex_diagnosis(&dataset, &filter),
            "sex_counts": count_by_sex(&dataset),
            "age_group_counts": count_by_age_group(&dataset),
            "age_stats_by_diagnosis": age_stats_by_diagnosis(&dataset, &filter),
            "age_histogram_by_sex": age_histogram_by_sex(&dataset, HISTOGRAM_BIN_WIDTH),
        });
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        let stats = DatasetStats::from_dataset(&dataset);
        print!("{}", generate_summary(&stats, &top));
    }

    Ok(())
}
