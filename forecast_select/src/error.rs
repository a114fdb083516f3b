//! Error types for the forecast_select crate

use forecast_math::MathError;
use thiserror::Error;

/// Custom error types for the forecast_select crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Series shorter than a technique or split requires
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Observed and estimated sequences of unequal length
    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A fit that failed to converge or produced no finite result
    #[error("Numeric instability: {0}")]
    NumericInstability(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to data loading or validation
    #[error("Data error: {0}")]
    DataError(String),

    /// Error in the selection configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error serializing a report
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InsufficientData(msg) => ForecastError::InsufficientData(msg),
            MathError::DimensionMismatch { expected, actual } => {
                ForecastError::DimensionMismatch { expected, actual }
            }
            MathError::InvalidInput(msg) => ForecastError::InvalidParameter(msg),
            MathError::CalculationError(msg) => ForecastError::NumericInstability(msg),
        }
    }
}

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::CsvError(err.to_string())
    }
}

impl From<toml::de::Error> for ForecastError {
    fn from(err: toml::de::Error) -> Self {
        ForecastError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::SerializationError(err.to_string())
    }
}
