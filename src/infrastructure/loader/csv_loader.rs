// ============================================================
// CSV LOADER
// ============================================================
// Read, decode, and parse delimited text into a Dataset

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::domain::dataset::{DataField, DataRow, Dataset};
use crate::domain::error::{AppError, Result};

use super::TextEncoding;

/// CSV loader with a fixed input encoding
pub struct CsvLoader {
    /// Encoding of the input bytes
    encoding: TextEncoding,

    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from headers and values
    trim: bool,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvLoader {
    /// Create a new loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input encoding
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Load a dataset from a file, named after the file stem
    pub fn load(&self, path: &Path) -> Result<Dataset> {
        let bytes = std::fs::read(path).map_err(|e| {
            AppError::FileAccess(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let content = self.encoding.decode(&bytes)?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dataset".to_string());

        self.load_str(&content, &name)
    }

    /// Load a dataset from already-decoded text (in-memory data and tests)
    pub fn load_str(&self, content: &str, name: &str) -> Result<Dataset> {
        if content.trim().is_empty() {
            return Ok(Dataset::new(name.to_string(), Vec::new(), Vec::new()));
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(false) // A row with the wrong field count is a parse error
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::Parse(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::Parse(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            let fields = headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| DataField::new(header.clone(), value.to_string()))
                .collect();

            rows.push(DataRow::new(index, fields));
        }

        Ok(Dataset::new(name.to_string(), headers, rows))
    }
}
