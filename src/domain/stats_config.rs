// ============================================================
// STATS CONFIGURATION
// ============================================================
// Tuning values for type inference and histogram sizing

use serde::{Deserialize, Serialize};

/// Configuration for statistics generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Maximum number of buckets kept in a rank histogram (default: 20)
    pub rank_histogram_size: usize,

    /// Maximum distinct/non-missing ratio for a text column to count as
    /// categorical (default: 0.5)
    pub categorical_ratio_threshold: f64,

    /// Maximum number of distinct values for a text column to count as
    /// categorical (default: 1000)
    pub categorical_unique_limit: usize,

    /// Number of equal-width buckets in numeric value histograms (default: 10)
    pub numeric_histogram_buckets: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            rank_histogram_size: 20,
            categorical_ratio_threshold: 0.5,
            categorical_unique_limit: 1000,
            numeric_histogram_buckets: 10,
        }
    }
}

impl StatsConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.rank_histogram_size == 0 {
            return Err("rank_histogram_size must be > 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.categorical_ratio_threshold) {
            return Err("categorical_ratio_threshold must be between 0.0 and 1.0".to_string());
        }
        if self.categorical_unique_limit == 0 {
            return Err("categorical_unique_limit must be > 0".to_string());
        }
        if self.numeric_histogram_buckets == 0 {
            return Err("numeric_histogram_buckets must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(StatsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_rank_histogram_size_is_rejected() {
        let config = StatsConfig {
            rank_histogram_size: 0,
            ..StatsConfig::default()
        };
        assert!(config
            .validate()
            .unwrap_err()
            .contains("rank_histogram_size"));
    }

    #[test]
    fn test_out_of_range_threshold_is_rejected() {
        for threshold in [-0.1, 1.5] {
            let config = StatsConfig {
                categorical_ratio_threshold: threshold,
                ..StatsConfig::default()
            };
            assert!(config
                .validate()
                .unwrap_err()
                .contains("categorical_ratio_threshold"));
        }
    }

    #[test]
    fn test_boundary_thresholds_are_valid() {
        for threshold in [0.0, 1.0] {
            let config = StatsConfig {
                categorical_ratio_threshold: threshold,
                ..StatsConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_zero_unique_limit_is_rejected() {
        let config = StatsConfig {
            categorical_unique_limit: 0,
            ..StatsConfig::default()
        };
        assert!(config
            .validate()
            .unwrap_err()
            .contains("categorical_unique_limit"));
    }

    #[test]
    fn test_zero_numeric_buckets_is_rejected() {
        let config = StatsConfig {
            numeric_histogram_buckets: 0,
            ..StatsConfig::default()
        };
        assert!(config
            .validate()
            .unwrap_err()
            .contains("numeric_histogram_buckets"));
    }
}
