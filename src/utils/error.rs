use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Calculation {index} not found ({count} saved)")]
    CalculationNotFoundError { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, QuoteError>;
