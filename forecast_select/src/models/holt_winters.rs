//! Holt-Winters smoothing with additive trend and additive season
//!
//! Unlike the other techniques the smoothing weights are not supplied by
//! the caller. They are fitted by minimising the in-sample sum of squared
//! one-step-ahead errors with a bounded Nelder-Mead search.

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use forecast_math::optimize::{nelder_mead, NelderMeadConfig};
use forecast_math::smoothing::{AdditiveHoltWinters, HoltWintersFit, HoltWintersWeights};
use tracing::{debug, warn};

const START: [f64; 3] = [0.3, 0.1, 0.1];
const BOUNDS: [(f64, f64); 3] = [(0.0, 1.0); 3];

/// Additive Holt-Winters model
#[derive(Debug, Clone)]
pub struct HoltWintersAdditive {
    /// Name of the model
    name: String,
    /// Seasonal cycle length
    season_count: usize,
    /// Settings for the weight search
    optimizer: NelderMeadConfig,
}

/// Trained Holt-Winters model
#[derive(Debug, Clone)]
pub struct TrainedHoltWinters {
    /// Name of the model
    name: String,
    /// Fitted smoothing weights
    weights: HoltWintersWeights,
    /// Smoothed state over the training data
    fit: HoltWintersFit,
}

fn weights_at(point: &[f64]) -> HoltWintersWeights {
    HoltWintersWeights {
        alpha: point[0],
        beta: point[1],
        gamma: point[2],
    }
}

impl HoltWintersAdditive {
    /// Create a new Holt-Winters model for the given seasonal cycle
    pub fn new(season_count: usize, optimizer: NelderMeadConfig) -> Result<Self> {
        if season_count < 2 {
            return Err(ForecastError::InvalidParameter(format!(
                "Season count must be at least 2, got {}",
                season_count
            )));
        }

        Ok(Self {
            name: format!("Holt-Winters (seasons={})", season_count),
            season_count,
            optimizer,
        })
    }

    /// Get the seasonal cycle length
    pub fn season_count(&self) -> usize {
        self.season_count
    }
}

impl ForecastModel for HoltWintersAdditive {
    type Trained = TrainedHoltWinters;

    fn train(&self, data: &[f64]) -> Result<Self::Trained> {
        if data.len() < 2 * self.season_count {
            return Err(ForecastError::InsufficientData(format!(
                "Holt-Winters with {} seasons needs at least {} observations, got {}",
                self.season_count,
                2 * self.season_count,
                data.len()
            )));
        }

        let m = self.season_count;
        let objective = |point: &[f64]| {
            AdditiveHoltWinters::new(weights_at(point), m)
                .and_then(|hw| hw.fit(data))
                .and_then(|fit| fit.sse(data))
                .unwrap_or(f64::INFINITY)
        };

        let result = nelder_mead(objective, &START, Some(&BOUNDS[..]), self.optimizer);
        if !result.converged {
            warn!(
                iterations = result.iterations,
                sse = result.optimal_value,
                "Holt-Winters weight search stopped before converging"
            );
        }

        let weights = weights_at(&result.optimal_point);
        debug!(
            alpha = weights.alpha,
            beta = weights.beta,
            gamma = weights.gamma,
            sse = result.optimal_value,
            "Holt-Winters weights fitted"
        );

        let fit = AdditiveHoltWinters::new(weights, m)?.fit(data)?;

        Ok(TrainedHoltWinters {
            name: self.name.clone(),
            weights,
            fit,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedHoltWinters {
    /// Smoothing weights chosen by the optimiser
    pub fn weights(&self) -> HoltWintersWeights {
        self.weights
    }
}

impl TrainedForecastModel for TrainedHoltWinters {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        let values = (1..=horizon)
            .map(|h| self.fit.forecast(h))
            .collect::<forecast_math::Result<Vec<f64>>>()?;

        ForecastResult::new(values, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
