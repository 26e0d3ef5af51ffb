// ============================================================
// STATISTICS MODEL
// ============================================================
// Aggregate results produced by the statistics generator
// Plain data with formatting helpers, no I/O

use serde::{Deserialize, Serialize};
use std::fmt;

use super::feature_type::FeatureType;

/// One (value, count) entry of a rank histogram
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankBucket {
    /// 1-based rank after sorting by descending count
    pub rank: usize,

    /// The distinct value this bucket counts
    pub label: String,

    /// Number of rows carrying the value
    pub count: usize,
}

/// Frequency ranking of the distinct values of a feature
///
/// Buckets are sorted by descending count; ties keep the order in which the
/// values first appeared in the data. Only the top entries are retained, per
/// `StatsConfig::rank_histogram_size`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RankHistogram {
    pub buckets: Vec<RankBucket>,
}

impl RankHistogram {
    /// Whether the histogram has no buckets
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// The buckets as (value, count) pairs, in rank order
    pub fn as_pairs(&self) -> Vec<(&str, usize)> {
        self.buckets
            .iter()
            .map(|b| (b.label.as_str(), b.count))
            .collect()
    }
}

impl fmt::Display for RankHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in &self.buckets {
            writeln!(
                f,
                "{:>3}. {:<24} {:>8}",
                bucket.rank,
                format!("\"{}\"", bucket.label),
                bucket.count
            )?;
        }
        Ok(())
    }
}

/// One equal-width bucket of a numeric value histogram
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistogramBucket {
    /// Inclusive lower edge
    pub low: f64,

    /// Upper edge; inclusive for the last bucket
    pub high: f64,

    /// Number of values falling in the bucket
    pub count: usize,
}

/// Counts shared by every feature regardless of type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommonStatistics {
    /// Total number of rows
    pub count: usize,

    /// Rows with a usable value
    pub non_missing: usize,

    /// Rows whose value is empty or a null marker
    pub missing: usize,
}

/// Aggregates for a numeric feature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NumericStatistics {
    pub min: f64,

    pub max: f64,

    pub mean: f64,

    /// Sample standard deviation; 0 for fewer than two values
    pub std_dev: f64,

    pub median: f64,

    /// First quartile (25th percentile)
    pub q1: f64,

    /// Third quartile (75th percentile)
    pub q3: f64,

    /// Equal-width value histogram for charting
    pub histogram: Vec<HistogramBucket>,
}

/// Aggregates for a string or categorical feature
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StringStatistics {
    /// Number of distinct non-missing values
    pub distinct_count: usize,

    /// Shortest value length, in characters
    pub min_length: usize,

    /// Mean value length, in characters
    pub mean_length: f64,

    /// Longest value length, in characters
    pub max_length: usize,

    /// Top values by frequency
    pub rank_histogram: RankHistogram,
}

/// Statistics computed for one feature (column)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureStatistics {
    /// Feature name (column header)
    pub name: String,

    /// Inferred value type
    pub feature_type: FeatureType,

    /// Type-independent counts
    pub common: CommonStatistics,

    /// Present for numeric features
    pub numeric: Option<NumericStatistics>,

    /// Present for string and categorical features
    pub string: Option<StringStatistics>,
}

impl FeatureStatistics {
    /// The rank histogram, when the feature has string statistics
    pub fn rank_histogram(&self) -> Option<&RankHistogram> {
        self.string.as_ref().map(|s| &s.rank_histogram)
    }
}

/// Statistics for every feature of one dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetStatistics {
    /// Dataset name (usually the source file stem)
    pub name: String,

    /// Number of analyzed rows
    pub num_rows: usize,

    /// Per-feature statistics, in header order
    pub features: Vec<FeatureStatistics>,
}

impl DatasetStatistics {
    /// Look up a feature by column name
    pub fn feature_by_name(&self, name: &str) -> Option<&FeatureStatistics> {
        self.features.iter().find(|f| f.name == name)
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        let numeric = self
            .features
            .iter()
            .filter(|f| f.feature_type == FeatureType::Numeric)
            .count();
        let categorical = self
            .features
            .iter()
            .filter(|f| f.feature_type == FeatureType::Categorical)
            .count();
        let string = self.features.len() - numeric - categorical;

        format!(
            "Dataset '{}' ({} rows, {} features): {} numeric, {} categorical, {} string",
            self.name,
            self.num_rows,
            self.features.len(),
            numeric,
            categorical,
            string
        )
    }
}

/// Complete generator output, covering every analyzed dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StatisticsReport {
    pub datasets: Vec<DatasetStatistics>,
}

impl StatisticsReport {
    /// Total number of features across all datasets
    pub fn feature_count(&self) -> usize {
        self.datasets.iter().map(|d| d.features.len()).sum()
    }
}
