//! Rolling-mean extrapolation, the trend-agnostic baseline

use crate::error::Result;
use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use forecast_math::moving_averages::RollingMeanExtrapolation;
use forecast_math::FORECAST_DECIMALS;
use tracing::warn;

/// Rolling-mean extrapolation model
#[derive(Debug, Clone)]
pub struct RollingMeanModel {
    /// Name of the model
    name: String,
    /// Recursive extrapolation over the window
    extrapolation: RollingMeanExtrapolation,
}

/// Trained rolling-mean model
#[derive(Debug, Clone)]
pub struct TrainedRollingMean {
    /// Name of the model
    name: String,
    /// Recursive extrapolation over the window
    extrapolation: RollingMeanExtrapolation,
    /// Observations the working buffer is seeded with
    history: Vec<f64>,
}

impl RollingMeanModel {
    /// Create a new rolling-mean model
    pub fn new(window: usize) -> Result<Self> {
        Ok(Self {
            name: format!("Moving Average (window={})", window),
            extrapolation: RollingMeanExtrapolation::new(window)?,
        })
    }

    /// Get the window size
    pub fn window(&self) -> usize {
        self.extrapolation.window()
    }
}

impl ForecastModel for RollingMeanModel {
    type Trained = TrainedRollingMean;

    fn train(&self, data: &[f64]) -> Result<Self::Trained> {
        if data.len() < self.window() {
            warn!(
                window = self.window(),
                observations = data.len(),
                "Window exceeds history, rolling mean will be NaN"
            );
        }

        Ok(TrainedRollingMean {
            name: self.name.clone(),
            extrapolation: self.extrapolation.clone(),
            history: data.to_vec(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedRollingMean {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        let values = self
            .extrapolation
            .extrapolate(&self.history, horizon, FORECAST_DECIMALS);

        ForecastResult::new(values, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
