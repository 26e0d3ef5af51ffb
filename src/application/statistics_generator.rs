// ============================================================
// STATISTICS GENERATOR
// ============================================================
// Compute per-feature descriptive statistics over a dataset

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::info;

use crate::domain::dataset::{DataField, Dataset};
use crate::domain::error::{AppError, Result};
use crate::domain::feature_type::FeatureType;
use crate::domain::statistics::{
    CommonStatistics, DatasetStatistics, FeatureStatistics, HistogramBucket, NumericStatistics,
    RankBucket, RankHistogram, StatisticsReport, StringStatistics,
};
use crate::domain::stats_config::StatsConfig;

/// Statistics generation use case
pub struct StatisticsGenerator {
    config: StatsConfig,
}

impl StatisticsGenerator {
    /// Create a new generator
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn default_config() -> Self {
        Self::new(StatsConfig::default())
    }

    /// Compute statistics for a single dataset
    ///
    /// Pure function of the dataset and the config: repeated runs over the
    /// same dataset yield equal reports.
    pub fn generate(&self, dataset: &Dataset) -> Result<StatisticsReport> {
        let start = Instant::now();

        self.config
            .validate()
            .map_err(|e| AppError::Config(format!("Invalid stats config: {}", e)))?;

        if dataset.is_empty() {
            return Err(AppError::EmptyDataset(format!(
                "Dataset '{}' has {} rows and {} columns",
                dataset.name,
                dataset.row_count(),
                dataset.column_count()
            )));
        }

        let features = dataset
            .headers
            .iter()
            .enumerate()
            .map(|(index, header)| self.analyze_column(dataset, index, header))
            .collect();

        let dataset_stats = DatasetStatistics {
            name: dataset.name.clone(),
            num_rows: dataset.row_count(),
            features,
        };

        info!(
            summary = %dataset_stats.summary(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Statistics generated"
        );

        Ok(StatisticsReport {
            datasets: vec![dataset_stats],
        })
    }

    /// Analyze one column into feature statistics
    fn analyze_column(&self, dataset: &Dataset, index: usize, name: &str) -> FeatureStatistics {
        let fields: Vec<&DataField> = dataset.column_fields(index).collect();

        let count = fields.len();
        let missing = fields.iter().filter(|f| f.is_missing).count();
        let common = CommonStatistics {
            count,
            non_missing: count - missing,
            missing,
        };

        let feature_type = self.infer_type(&fields);

        let (numeric, string) = if feature_type.has_string_stats() {
            (None, Some(self.string_statistics(&fields)))
        } else {
            (Some(self.numeric_statistics(&fields)), None)
        };

        FeatureStatistics {
            name: name.to_string(),
            feature_type,
            common,
            numeric,
            string,
        }
    }

    /// Infer the feature type from the non-missing values
    ///
    /// Numeric wins when every usable value parses as a finite number. Text
    /// columns with few distinct values relative to their size count as
    /// categorical. Everything else, including mixed and all-missing
    /// columns, is plain string.
    fn infer_type(&self, fields: &[&DataField]) -> FeatureType {
        let valid_count = fields.iter().filter(|f| !f.is_missing).count();
        if valid_count == 0 {
            return FeatureType::String;
        }

        if fields
            .iter()
            .filter(|f| !f.is_missing)
            .all(|f| f.is_numeric)
        {
            return FeatureType::Numeric;
        }

        let distinct: HashSet<&str> = fields
            .iter()
            .filter(|f| !f.is_missing)
            .map(|f| f.value.as_str())
            .collect();
        let ratio = distinct.len() as f64 / valid_count as f64;

        if ratio <= self.config.categorical_ratio_threshold
            && distinct.len() <= self.config.categorical_unique_limit
        {
            FeatureType::Categorical
        } else {
            FeatureType::String
        }
    }

    /// Numeric aggregates over the valid values of a column
    fn numeric_statistics(&self, fields: &[&DataField]) -> NumericStatistics {
        let mut values: Vec<f64> = fields.iter().filter_map(|f| f.as_f64()).collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = values.len();
        let min = values.first().copied().unwrap_or(0.0);
        let max = values.last().copied().unwrap_or(0.0);
        let mean = if n > 0 {
            values.iter().sum::<f64>() / n as f64
        } else {
            0.0
        };

        let std_dev = if n > 1 {
            let variance =
                values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };

        NumericStatistics {
            min,
            max,
            mean,
            std_dev,
            median: quantile(&values, 0.5),
            q1: quantile(&values, 0.25),
            q3: quantile(&values, 0.75),
            histogram: equal_width_histogram(&values, self.config.numeric_histogram_buckets),
        }
    }

    /// String aggregates and frequency ranking over the valid values
    fn string_statistics(&self, fields: &[&DataField]) -> StringStatistics {
        // value -> (count, index of first appearance)
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();

        let mut valid = 0usize;
        let mut total_length = 0usize;
        let mut min_length = usize::MAX;
        let mut max_length = 0usize;

        for field in fields.iter().filter(|f| !f.is_missing) {
            let length = field.value.chars().count();
            total_length += length;
            min_length = min_length.min(length);
            max_length = max_length.max(length);

            let entry = counts.entry(field.value.as_str()).or_insert((0, valid));
            entry.0 += 1;
            valid += 1;
        }

        let mut ranked: Vec<(&str, usize, usize)> = counts
            .iter()
            .map(|(value, (count, first_seen))| (*value, *count, *first_seen))
            .collect();
        // Descending count; ties resolved by first appearance in the data
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        let buckets = ranked
            .iter()
            .take(self.config.rank_histogram_size)
            .enumerate()
            .map(|(idx, (value, count, _))| RankBucket {
                rank: idx + 1,
                label: value.to_string(),
                count: *count,
            })
            .collect();

        StringStatistics {
            distinct_count: counts.len(),
            min_length: if valid == 0 { 0 } else { min_length },
            mean_length: if valid == 0 {
                0.0
            } else {
                total_length as f64 / valid as f64
            },
            max_length,
            rank_histogram: RankHistogram { buckets },
        }
    }
}

impl Default for StatisticsGenerator {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Linear-interpolation quantile over sorted values
fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let pos = q * (n - 1) as f64;
            let lower = pos.floor() as usize;
            let upper = pos.ceil() as usize;
            if lower == upper {
                sorted[lower]
            } else {
                sorted[lower] + (sorted[upper] - sorted[lower]) * (pos - lower as f64)
            }
        }
    }
}

/// Equal-width bucket counts over sorted values
fn equal_width_histogram(sorted: &[f64], bucket_count: usize) -> Vec<HistogramBucket> {
    if sorted.is_empty() || bucket_count == 0 {
        return Vec::new();
    }

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    if max <= min {
        // Constant column collapses into a single bucket
        return vec![HistogramBucket {
            low: min,
            high: max,
            count: sorted.len(),
        }];
    }

    let width = (max - min) / bucket_count as f64;
    let mut buckets: Vec<HistogramBucket> = (0..bucket_count)
        .map(|i| HistogramBucket {
            low: min + width * i as f64,
            high: if i + 1 == bucket_count {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for &value in sorted {
        let mut idx = ((value - min) / width) as usize;
        if idx >= bucket_count {
            idx = bucket_count - 1; // the maximum lands in the last bucket
        }
        buckets[idx].count += 1;
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::loader::CsvLoader;

    fn dataset_from(content: &str) -> Dataset {
        CsvLoader::new().load_str(content, "test").unwrap()
    }

    fn generate(content: &str) -> StatisticsReport {
        StatisticsGenerator::default_config()
            .generate(&dataset_from(content))
            .unwrap()
    }

    #[test]
    fn test_rank_histogram_ordering() {
        let report = generate("v\na\na\nb\na\nb\na\nc\nb\na");
        let feature = &report.datasets[0].features[0];
        let histogram = feature.rank_histogram().unwrap();

        assert_eq!(histogram.as_pairs(), vec![("a", 5), ("b", 3), ("c", 1)]);
        assert_eq!(histogram.buckets[0].rank, 1);
        assert_eq!(histogram.buckets[2].rank, 3);
    }

    #[test]
    fn test_rank_histogram_tie_break_first_encountered() {
        // b and a both appear twice; b appears first
        let report = generate("v\nb\na\nb\na");
        let histogram = report.datasets[0].features[0].rank_histogram().unwrap();

        assert_eq!(histogram.as_pairs(), vec![("b", 2), ("a", 2)]);
    }

    #[test]
    fn test_rank_histogram_truncation() {
        let mut content = String::from("v\n");
        for i in 0..30 {
            content.push_str(&format!("value{}\n", i));
        }
        let report = generate(&content);
        let feature = &report.datasets[0].features[0];
        let string = feature.string.as_ref().unwrap();

        assert_eq!(string.distinct_count, 30);
        assert_eq!(string.rank_histogram.len(), 20);
    }

    #[test]
    fn test_custom_rank_histogram_size() {
        let config = StatsConfig {
            rank_histogram_size: 2,
            ..StatsConfig::default()
        };
        let dataset = dataset_from("v\na\na\na\nb\nb\nc");
        let report = StatisticsGenerator::new(config).generate(&dataset).unwrap();
        let histogram = report.datasets[0].features[0].rank_histogram().unwrap();

        assert_eq!(histogram.as_pairs(), vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let dataset = dataset_from("label,amount\nham,1\nspam,2\nham,NA");
        let generator = StatisticsGenerator::default_config();

        let first = generator.generate(&dataset).unwrap();
        let second = generator.generate(&dataset).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let err = StatisticsGenerator::default_config()
            .generate(&dataset_from(""))
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyDataset(_)));
    }

    #[test]
    fn test_header_only_dataset_is_rejected() {
        let err = StatisticsGenerator::default_config()
            .generate(&dataset_from("label,text\n"))
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyDataset(_)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = StatsConfig {
            numeric_histogram_buckets: 0,
            ..StatsConfig::default()
        };
        let err = StatisticsGenerator::new(config)
            .generate(&dataset_from("a\n1"))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_numeric_aggregates() {
        let report = generate("n\n1\n2\n3\n4");
        let feature = &report.datasets[0].features[0];
        assert_eq!(feature.feature_type, FeatureType::Numeric);

        let numeric = feature.numeric.as_ref().unwrap();
        assert_eq!(numeric.min, 1.0);
        assert_eq!(numeric.max, 4.0);
        assert_eq!(numeric.mean, 2.5);
        assert!((numeric.std_dev - 1.2909944487358056).abs() < 1e-9);
        assert_eq!(numeric.median, 2.5);
        assert_eq!(numeric.q1, 1.75);
        assert_eq!(numeric.q3, 3.25);
    }

    #[test]
    fn test_numeric_ignores_missing_values() {
        let report = generate("n\n1\nNA\n3\n");
        let feature = &report.datasets[0].features[0];

        assert_eq!(feature.feature_type, FeatureType::Numeric);
        assert_eq!(feature.common.missing, 1);
        assert_eq!(feature.numeric.as_ref().unwrap().mean, 2.0);
    }

    #[test]
    fn test_single_value_has_zero_std_dev() {
        let report = generate("n\n7\nNA");
        let numeric = report.datasets[0].features[0].numeric.as_ref().unwrap();

        assert_eq!(numeric.std_dev, 0.0);
        assert_eq!(numeric.median, 7.0);
    }

    #[test]
    fn test_numeric_histogram_buckets() {
        let config = StatsConfig {
            numeric_histogram_buckets: 2,
            ..StatsConfig::default()
        };
        let dataset = dataset_from("n\n0\n1\n2\n3");
        let report = StatisticsGenerator::new(config).generate(&dataset).unwrap();
        let numeric = report.datasets[0].features[0].numeric.as_ref().unwrap();

        assert_eq!(numeric.histogram.len(), 2);
        assert_eq!(numeric.histogram[0].low, 0.0);
        assert_eq!(numeric.histogram[0].high, 1.5);
        assert_eq!(numeric.histogram[0].count, 2);
        assert_eq!(numeric.histogram[1].high, 3.0);
        assert_eq!(numeric.histogram[1].count, 2);
    }

    #[test]
    fn test_constant_column_histogram() {
        let report = generate("n\n5\n5\n5");
        let numeric = report.datasets[0].features[0].numeric.as_ref().unwrap();

        assert_eq!(numeric.histogram.len(), 1);
        assert_eq!(numeric.histogram[0].count, 3);
        assert_eq!(numeric.std_dev, 0.0);
    }

    #[test]
    fn test_type_inference_categorical() {
        let report = generate("v\nx\ny\nx\ny\nx\nx\ny\nx\ny\nx");
        assert_eq!(
            report.datasets[0].features[0].feature_type,
            FeatureType::Categorical
        );
    }

    #[test]
    fn test_type_inference_string_fallback_for_mixed_column() {
        // Two numbers and a word: not numeric, and too diverse for categorical
        let report = generate("v\n1\nabc\n2");
        assert_eq!(report.datasets[0].features[0].feature_type, FeatureType::String);
    }

    #[test]
    fn test_all_missing_column_falls_back_to_string() {
        let report = generate("v,w\nNA,1\n,2\nnull,3");
        let feature = &report.datasets[0].features[0];

        assert_eq!(feature.feature_type, FeatureType::String);
        assert_eq!(feature.common.non_missing, 0);

        let string = feature.string.as_ref().unwrap();
        assert_eq!(string.distinct_count, 0);
        assert_eq!(string.min_length, 0);
        assert_eq!(string.max_length, 0);
        assert!(string.rank_histogram.is_empty());
    }

    #[test]
    fn test_missing_counts() {
        let report = generate("v,w\nham,1\n,2\nspam,3\nNA,4\nham,5");
        let common = &report.datasets[0].features[0].common;

        assert_eq!(common.count, 5);
        assert_eq!(common.missing, 2);
        assert_eq!(common.non_missing, 3);
    }

    #[test]
    fn test_length_stats_count_characters() {
        let report = generate("v\na\nabc\ncafé");
        let string = report.datasets[0].features[0].string.as_ref().unwrap();

        assert_eq!(string.min_length, 1);
        assert_eq!(string.max_length, 4);
        assert!((string.mean_length - 8.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_feature_by_name() {
        let report = generate("label,amount\nham,1\nspam,2");
        let dataset = &report.datasets[0];

        assert_eq!(
            dataset.feature_by_name("amount").map(|f| f.feature_type),
            Some(FeatureType::Numeric)
        );
        assert!(dataset.feature_by_name("nope").is_none());
    }

    #[test]
    fn test_spam_label_scenario() {
        let mut content = String::from("label,text\n");
        let spam_rows: [usize; 13] = [5, 12, 19, 26, 33, 40, 47, 54, 61, 68, 75, 82, 89];
        for i in 0..100 {
            let label = if spam_rows.contains(&i) { "spam" } else { "ham" };
            content.push_str(&format!("{},message {}\n", label, i));
        }

        let report = generate(&content);
        let dataset = &report.datasets[0];
        assert_eq!(dataset.num_rows, 100);
        assert_eq!(dataset.features[0].name, "label");

        let histogram = dataset.features[0].rank_histogram().unwrap();
        assert_eq!(histogram.as_pairs(), vec![("ham", 87), ("spam", 13)]);
    }

    #[test]
    fn test_quantile_interpolation() {
        let values = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(quantile(&values, 0.0), 10.0);
        assert_eq!(quantile(&values, 0.5), 25.0);
        assert_eq!(quantile(&values, 1.0), 40.0);
        assert_eq!(quantile(&[42.0], 0.5), 42.0);
        assert_eq!(quantile(&[], 0.5), 0.0);
    }
}
