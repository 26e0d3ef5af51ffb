// ============================================================
// DOMAIN LAYER
// ============================================================
// Core types and value objects for dataset statistics
// No I/O, no async, no external services

pub mod dataset;
pub mod error;
pub mod feature_type;
pub mod statistics;
pub mod stats_config;

pub use dataset::{DataField, DataRow, Dataset, DEFAULT_NULL_MARKERS};
pub use feature_type::FeatureType;
pub use statistics::{
    CommonStatistics, DatasetStatistics, FeatureStatistics, HistogramBucket, NumericStatistics,
    RankBucket, RankHistogram, StatisticsReport, StringStatistics,
};
pub use stats_config::StatsConfig;
