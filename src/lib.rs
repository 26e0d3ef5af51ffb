// ============================================================
// DATASENSE
// ============================================================
// Fixed pipeline over the bundled SMS spam corpus: load the
// CSV, compute per-feature statistics, print the headline rank
// histogram, render the HTML report.

pub mod application;
pub mod domain;
pub mod infrastructure;

use std::path::Path;

use tracing::{error, info};

use crate::application::{Reporter, StatisticsGenerator};
use crate::domain::error::Result;
use crate::domain::stats_config::StatsConfig;
use crate::infrastructure::loader::{CsvLoader, TextEncoding};

/// Input file analyzed by the pipeline
pub const DATA_PATH: &str = "data/spam.csv";

/// The corpus ships as Latin-1, not UTF-8
pub const DATA_ENCODING: TextEncoding = TextEncoding::Latin1;

/// Run the whole pipeline: load, analyze, print, visualize
pub fn run() -> Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    info!(path = DATA_PATH, encoding = %DATA_ENCODING, "Loading dataset");
    let dataset = CsvLoader::new()
        .with_encoding(DATA_ENCODING)
        .load(Path::new(DATA_PATH))
        .map_err(|err| {
            error!(error = %err, path = DATA_PATH, "Failed to load dataset");
            err
        })?;

    let report = StatisticsGenerator::new(StatsConfig::new()).generate(&dataset)?;

    Reporter::print_first_rank_histogram(&report)?;

    let report_path = Reporter::visualize(&report)?;
    info!(
        features = report.feature_count(),
        path = %report_path.display(),
        "Pipeline finished"
    );

    Ok(())
}
