//! Rolling mean calculations
//!
//! Contains the trailing-window mean and the recursive rolling-mean
//! extrapolation used as the trend-agnostic baseline forecast.

use crate::rounding::round_to;
use crate::{MathError, Result};

/// Mean of the last `window` values of `values`.
///
/// Returns NaN when fewer than `window` values are available, mirroring a
/// rolling mean that has not yet filled its window.
pub fn trailing_mean(values: &[f64], window: usize) -> f64 {
    if window == 0 || values.len() < window {
        return f64::NAN;
    }
    values[values.len() - window..].iter().sum::<f64>() / window as f64
}

/// Recursive rolling-mean extrapolation
///
/// Each step averages the last `window` points of a working buffer seeded
/// with the history, rounds the mean, and appends it to the buffer. Once
/// the window slides past the history, forecasts feed on earlier forecasts.
#[derive(Debug, Clone)]
pub struct RollingMeanExtrapolation {
    window: usize,
}

impl RollingMeanExtrapolation {
    /// Create a new extrapolation with the specified window
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(MathError::InvalidInput(
                "Window must be greater than zero".to_string(),
            ));
        }

        Ok(Self { window })
    }

    /// Get the window size
    pub fn window(&self) -> usize {
        self.window
    }

    /// Extrapolate `horizon` points past the end of `history`.
    ///
    /// A window longer than the history produces NaN, which then
    /// propagates through every later step.
    pub fn extrapolate(&self, history: &[f64], horizon: usize, decimals: u32) -> Vec<f64> {
        let mut buffer = Vec::with_capacity(history.len() + horizon);
        buffer.extend_from_slice(history);

        let mut estimates = Vec::with_capacity(horizon);
        for _ in 0..horizon {
            let estimate = round_to(trailing_mean(&buffer, self.window), decimals);
            estimates.push(estimate);
            buffer.push(estimate);
        }

        estimates
    }
}
