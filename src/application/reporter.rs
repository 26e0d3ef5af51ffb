// ============================================================
// REPORTER
// ============================================================
// Print the headline rank histogram and render the visual report

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::domain::error::{AppError, Result};
use crate::domain::statistics::{RankHistogram, StatisticsReport};
use crate::infrastructure::report::write_report;

/// Reporting use case over a finished statistics report
pub struct Reporter;

impl Reporter {
    /// Rank histogram of the first feature of the first dataset
    ///
    /// Errors when the report has no dataset or the dataset has no
    /// features. A first feature without string statistics (a numeric
    /// column) yields an empty histogram with a warning instead.
    pub fn first_feature_rank_histogram(report: &StatisticsReport) -> Result<RankHistogram> {
        let dataset = report
            .datasets
            .first()
            .ok_or_else(|| AppError::Index("Report contains no datasets".to_string()))?;

        let feature = dataset.features.first().ok_or_else(|| {
            AppError::Index(format!("Dataset '{}' contains no features", dataset.name))
        })?;

        match feature.rank_histogram() {
            Some(histogram) => Ok(histogram.clone()),
            None => {
                warn!(
                    feature = %feature.name,
                    feature_type = %feature.feature_type,
                    "First feature has no string statistics; rank histogram is empty"
                );
                Ok(RankHistogram::default())
            }
        }
    }

    /// Print the headline rank histogram to stdout
    pub fn print_first_rank_histogram(report: &StatisticsReport) -> Result<()> {
        let histogram = Self::first_feature_rank_histogram(report)?;
        print!("{}", histogram);
        Ok(())
    }

    /// Render the report to a temporary HTML file and open it
    ///
    /// A failed open is only a warning: on headless hosts there is
    /// nothing to open the file with, but the file itself is still
    /// written and its path returned.
    pub fn visualize(report: &StatisticsReport) -> Result<PathBuf> {
        let path = Self::visualize_to(report, &std::env::temp_dir())?;

        if let Err(err) = open::that(&path) {
            warn!(
                error = %err,
                path = %path.display(),
                "Could not open report in a viewer"
            );
        }

        Ok(path)
    }

    /// Render the report to an HTML file in the given directory
    pub fn visualize_to(report: &StatisticsReport, dir: &Path) -> Result<PathBuf> {
        let path = write_report(report, dir)?;
        info!(path = %path.display(), "Statistics report rendered");
        Ok(path)
    }
}
