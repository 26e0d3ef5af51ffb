// ============================================================
// FEATURE TYPE ENUM
// ============================================================
// Value type inferred for a dataset column

use serde::{Deserialize, Serialize};

/// Value type inferred for a feature (column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    /// Every non-missing value parses as a finite number
    Numeric,

    /// Free-form text; also the fallback for mixed or all-missing columns
    String,

    /// Text with few distinct values relative to the column size
    Categorical,
}

impl FeatureType {
    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            FeatureType::Numeric => "Numbers summarized by range, moments, and quantiles",
            FeatureType::String => "Free-form text summarized by value lengths and frequent values",
            FeatureType::Categorical => "Discrete categories summarized by their frequency ranking",
        }
    }

    /// Whether string-style statistics apply to this type
    pub fn has_string_stats(&self) -> bool {
        matches!(self, FeatureType::String | FeatureType::Categorical)
    }
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureType::Numeric => write!(f, "Numeric"),
            FeatureType::String => write!(f, "String"),
            FeatureType::Categorical => write!(f, "Categorical"),
        }
    }
}
