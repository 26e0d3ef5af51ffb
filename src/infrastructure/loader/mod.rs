// ============================================================
// DATASET LOADER
// ============================================================
// Byte reading, text decoding, and CSV parsing

mod csv_loader;
mod encoding;

pub use csv_loader::CsvLoader;
pub use encoding::TextEncoding;
