//! Holt's linear-trend exponential smoothing

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use forecast_math::smoothing::DoubleExponentialSmoothing;

/// Holt linear-trend model with fixed level and slope weights
#[derive(Debug, Clone)]
pub struct HoltLinear {
    /// Name of the model
    name: String,
    /// Level smoothing
    alpha: f64,
    /// Trend smoothing
    slope: f64,
}

/// Trained Holt model
#[derive(Debug, Clone)]
pub struct TrainedHoltLinear {
    /// Name of the model
    name: String,
    /// Smoother state after the last observation
    state: DoubleExponentialSmoothing,
}

impl HoltLinear {
    /// Create a new Holt model
    pub fn new(alpha: f64, slope: f64) -> Result<Self> {
        DoubleExponentialSmoothing::new(alpha, slope)?;

        Ok(Self {
            name: format!("Holt (alpha={}, slope={})", alpha, slope),
            alpha,
            slope,
        })
    }

    /// Get the level smoothing weight
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the trend smoothing weight
    pub fn slope(&self) -> f64 {
        self.slope
    }
}

impl ForecastModel for HoltLinear {
    type Trained = TrainedHoltLinear;

    fn train(&self, data: &[f64]) -> Result<Self::Trained> {
        if data.len() < 2 {
            return Err(ForecastError::InsufficientData(format!(
                "Holt needs at least 2 observations, got {}",
                data.len()
            )));
        }

        let mut state = DoubleExponentialSmoothing::new(self.alpha, self.slope)?;
        for &value in data {
            state.update(value);
        }

        Ok(TrainedHoltLinear {
            name: self.name.clone(),
            state,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedHoltLinear {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        let values = (1..=horizon)
            .map(|h| self.state.forecast(h))
            .collect::<forecast_math::Result<Vec<f64>>>()?;

        ForecastResult::new(values, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
