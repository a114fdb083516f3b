//! Forecast error metrics
//!
//! All metrics compare an observed sequence with an estimate sequence of
//! the same length. Non-finite inputs are not rejected: a NaN estimate
//! yields a NaN score so that callers can rank it out explicitly.

use crate::{MathError, Result};

fn check_lengths(observed: &[f64], estimated: &[f64]) -> Result<()> {
    if observed.len() != estimated.len() {
        return Err(MathError::DimensionMismatch {
            expected: observed.len(),
            actual: estimated.len(),
        });
    }
    if observed.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot score an empty forecast".to_string(),
        ));
    }
    Ok(())
}

/// Sum of squared differences between observed and estimated values
pub fn sum_squared_error(observed: &[f64], estimated: &[f64]) -> Result<f64> {
    check_lengths(observed, estimated)?;

    Ok(observed
        .iter()
        .zip(estimated.iter())
        .map(|(o, e)| (o - e).powi(2))
        .sum())
}

/// Mean squared error between observed and estimated values
pub fn mean_squared_error(observed: &[f64], estimated: &[f64]) -> Result<f64> {
    let sse = sum_squared_error(observed, estimated)?;
    Ok(sse / observed.len() as f64)
}

/// Root mean squared error between observed and estimated values
///
/// Lower is better. The metric is symmetric in its two arguments.
///
/// # Examples
///
/// ```
/// use forecast_math::rmse;
///
/// let error = rmse(&[1.0, 2.0, 3.0, 4.0], &[2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(error, 1.0);
/// ```
pub fn rmse(observed: &[f64], estimated: &[f64]) -> Result<f64> {
    Ok(mean_squared_error(observed, estimated)?.sqrt())
}
