use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QcError>;

#[derive(Error, Debug)]
pub enum QcError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Duplicate date {date} on line {line}")]
    DuplicateDate { line: usize, date: NaiveDate },
}

impl QcError {
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        QcError::Parse {
            line,
            reason: reason.into(),
        }
    }
}
