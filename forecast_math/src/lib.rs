//! # Forecast Math
//!
//! Numeric kernels behind forecast model selection.
//! This crate provides the error metric used to score forecasts, the
//! exponential smoothing recursions, rounding helpers and a bounded
//! Nelder-Mead minimiser. It performs no I/O.

use thiserror::Error;

pub mod metrics;
pub mod moving_averages;
pub mod optimize;
pub mod rounding;
pub mod smoothing;

pub use metrics::{mean_squared_error, rmse, sum_squared_error};
pub use rounding::{round_all, round_to, FORECAST_DECIMALS};

/// Errors that can occur in forecasting calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for forecasting math operations
pub type Result<T> = std::result::Result<T, MathError>;

/// Check that a smoothing weight lies in the closed unit interval
pub(crate) fn check_unit_interval(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(MathError::InvalidInput(format!(
            "{} must be between 0 and 1 (inclusive), got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_interval_bounds() {
        assert!(check_unit_interval("alpha", 0.0).is_ok());
        assert!(check_unit_interval("alpha", 1.0).is_ok());
        assert!(check_unit_interval("alpha", -0.1).is_err());
        assert!(check_unit_interval("alpha", f64::NAN).is_err());
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = MathError::DimensionMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: expected 4 values, got 3"
        );
    }
}
