use std::fmt;

#[derive(Debug)]
pub enum AppError {
    FileAccess(String),
    Decode(String),
    Parse(String),
    EmptyDataset(String),
    Index(String),
    Config(String),
    Render(String),
    Io(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::FileAccess(msg) => write!(f, "File access error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::EmptyDataset(msg) => write!(f, "Empty dataset: {}", msg),
            AppError::Index(msg) => write!(f, "Index error: {}", msg),
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Render(msg) => write!(f, "Render error: {}", msg),
            AppError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
