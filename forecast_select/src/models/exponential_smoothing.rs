//! Simple exponential smoothing for time series forecasting

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use forecast_math::smoothing::ExponentialSmoothing;

/// Simple exponential smoothing model with a fixed alpha
#[derive(Debug, Clone)]
pub struct SimpleExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Smoothing parameter
    alpha: f64,
}

/// Trained simple exponential smoothing model
#[derive(Debug, Clone)]
pub struct TrainedSimpleExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Smoothed level after the last observation
    level: f64,
}

impl SimpleExponentialSmoothing {
    /// Create a new simple exponential smoothing model
    pub fn new(alpha: f64) -> Result<Self> {
        // Validates the range before any data is seen
        ExponentialSmoothing::new(alpha)?;

        Ok(Self {
            name: format!("Simple Exponential Smoothing (alpha={})", alpha),
            alpha,
        })
    }

    /// Get the smoothing parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl ForecastModel for SimpleExponentialSmoothing {
    type Trained = TrainedSimpleExponentialSmoothing;

    fn train(&self, data: &[f64]) -> Result<Self::Trained> {
        if data.is_empty() {
            return Err(ForecastError::InsufficientData(
                "Empty time series data".to_string(),
            ));
        }

        let mut smoother = ExponentialSmoothing::new(self.alpha)?;
        for &value in data {
            smoother.update(value);
        }

        Ok(TrainedSimpleExponentialSmoothing {
            name: self.name.clone(),
            level: smoother.value()?,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedSimpleExponentialSmoothing {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        // No trend or season, so the forecast is flat at the last level
        ForecastResult::new(vec![self.level; horizon], horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
