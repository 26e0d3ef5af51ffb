// ============================================================
// TEXT ENCODING
// ============================================================
// Supported input encodings and byte-to-string decoding

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::domain::error::{AppError, Result};

/// Text encoding of raw input bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8; malformed sequences are an error
    Utf8,

    /// Latin-1 (ISO-8859-1), decoded as its windows-1252 superset
    Latin1,

    /// Windows-1252
    Windows1252,
}

impl TextEncoding {
    /// Resolve an encoding label such as "latin-1" or "utf-8"
    pub fn from_label(label: &str) -> Result<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(TextEncoding::Latin1),
            "windows-1252" | "cp1252" => Ok(TextEncoding::Windows1252),
            other => Err(AppError::Decode(format!(
                "Unsupported encoding label: {}",
                other
            ))),
        }
    }

    /// The canonical label of the encoding
    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Windows1252 => "windows-1252",
        }
    }

    fn encoding(&self) -> &'static Encoding {
        match self {
            TextEncoding::Utf8 => UTF_8,
            // WHATWG maps latin-1 onto windows-1252; every byte decodes
            TextEncoding::Latin1 | TextEncoding::Windows1252 => WINDOWS_1252,
        }
    }

    /// Decode raw bytes into a string, stripping a leading BOM
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        let (text, had_errors) = self.encoding().decode_with_bom_removal(bytes);
        if had_errors {
            return Err(AppError::Decode(format!(
                "Input is not valid {}",
                self.label()
            )));
        }
        Ok(text.into_owned())
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_aliases() {
        assert_eq!(TextEncoding::from_label("latin-1").unwrap(), TextEncoding::Latin1);
        assert_eq!(TextEncoding::from_label("ISO-8859-1").unwrap(), TextEncoding::Latin1);
        assert_eq!(TextEncoding::from_label(" UTF-8 ").unwrap(), TextEncoding::Utf8);
        assert_eq!(
            TextEncoding::from_label("cp1252").unwrap(),
            TextEncoding::Windows1252
        );
        assert!(TextEncoding::from_label("ebcdic").is_err());
    }

    #[test]
    fn test_latin1_decodes_every_byte() {
        // 0xE9 is "é" in latin-1 and windows-1252 alike
        let decoded = TextEncoding::Latin1.decode(b"caf\xe9").unwrap();
        assert_eq!(decoded, "café");
    }

    #[test]
    fn test_utf8_rejects_malformed_bytes() {
        let err = TextEncoding::Utf8.decode(b"caf\xe9").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let decoded = TextEncoding::Utf8.decode(b"\xef\xbb\xbfa,b").unwrap();
        assert_eq!(decoded, "a,b");
    }
}
