use thiserror::Error;

#[derive(Debug, Error)]
pub enum StockplanError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Record not found: index {0}")]
    RecordNotFound(usize),

    #[error("IO error: {0}")]
    Io(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StockplanError>;
