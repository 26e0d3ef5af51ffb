// ============================================================
// DATASET TYPES
// ============================================================
// Data structures representing loaded tabular data

use serde::{Deserialize, Serialize};

/// Values whose trimmed form counts as missing, in addition to the empty string
pub const DEFAULT_NULL_MARKERS: &[&str] = &[
    "NA", "N/A", "na", "n/a", "null", "NULL", "None", "none", "NaN", "nan",
];

/// A single field in a data row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataField {
    /// Column name (header)
    pub name: String,

    /// Raw field value
    pub value: String,

    /// Whether the value counts as missing (empty or a null marker)
    pub is_missing: bool,

    /// Whether the value parses as a finite number
    pub is_numeric: bool,
}

impl DataField {
    /// Create a new field, classifying its value on the way in
    pub fn new(name: String, value: String) -> Self {
        let is_missing = Self::is_missing_value(&value);
        let is_numeric = !is_missing && Self::is_numeric_value(&value);

        Self {
            name,
            value,
            is_missing,
            is_numeric,
        }
    }

    /// Check if a string value counts as missing
    fn is_missing_value(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty() || DEFAULT_NULL_MARKERS.contains(&trimmed)
    }

    /// Check if a string value is a finite number
    fn is_numeric_value(value: &str) -> bool {
        value
            .trim()
            .parse::<f64>()
            .map(|v| v.is_finite())
            .unwrap_or(false)
    }

    /// The value as a finite number, when it is one
    pub fn as_f64(&self) -> Option<f64> {
        if self.is_missing {
            return None;
        }
        self.value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// A single row of a dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataRow {
    /// Row index (0-based, header excluded)
    pub index: usize,

    /// All fields in this row, in header order
    pub fields: Vec<DataField>,
}

impl DataRow {
    /// Create a new data row
    pub fn new(index: usize, fields: Vec<DataField>) -> Self {
        Self { index, fields }
    }

    /// Get a field value by column name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// A loaded tabular dataset: header names plus ordered data rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    /// Dataset name (usually the source file stem)
    pub name: String,

    /// Column names in file order
    pub headers: Vec<String>,

    /// Data rows, header excluded
    pub rows: Vec<DataRow>,
}

impl Dataset {
    /// Create a new dataset
    pub fn new(name: String, headers: Vec<String>, rows: Vec<DataRow>) -> Self {
        Self { name, headers, rows }
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Whether the dataset has no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.headers.is_empty()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate the fields of one column across all rows
    pub fn column_fields(&self, index: usize) -> impl Iterator<Item = &DataField> {
        self.rows.iter().filter_map(move |row| row.fields.get(index))
    }
}
