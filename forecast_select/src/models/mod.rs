//! Forecasting techniques for univariate time series

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use forecast_math::optimize::NelderMeadConfig;
use forecast_math::{rmse, round_all, FORECAST_DECIMALS};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Forecast result containing predicted values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    /// Forecasted values, rounded to four decimal places
    values: Vec<f64>,
    /// Number of periods forecasted
    horizons: usize,
    /// Dates of the forecasted periods (optional)
    dates: Option<Vec<NaiveDate>>,
}

impl ForecastResult {
    /// Create a new forecast result, rounding every value
    pub fn new(values: Vec<f64>, horizons: usize) -> Result<Self> {
        if values.len() != horizons {
            return Err(ForecastError::DimensionMismatch {
                expected: horizons,
                actual: values.len(),
            });
        }

        Ok(Self {
            values: round_all(&values, FORECAST_DECIMALS),
            horizons,
            dates: None,
        })
    }

    /// Attach one date per forecasted period
    pub fn with_dates(mut self, dates: Vec<NaiveDate>) -> Result<Self> {
        if dates.len() != self.horizons {
            return Err(ForecastError::DimensionMismatch {
                expected: self.horizons,
                actual: dates.len(),
            });
        }
        self.dates = Some(dates);
        Ok(self)
    }

    /// Get the forecasted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of periods forecasted
    pub fn horizons(&self) -> usize {
        self.horizons
    }

    /// Get the forecast dates, if available
    pub fn dates(&self) -> Option<&[NaiveDate]> {
        self.dates.as_deref()
    }

    /// The furthest forecast point
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Root mean squared error against the actual values
    pub fn rmse(&self, actual: &[f64]) -> Result<f64> {
        Ok(rmse(actual, &self.values)?)
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Generate forecast for future periods
    fn forecast(&self, horizons: usize) -> Result<ForecastResult>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on a series
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on the observations
    fn train(&self, data: &[f64]) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;

    /// Train on `data` and forecast `horizons` periods past its end
    fn estimate(&self, data: &[f64], horizons: usize) -> Result<ForecastResult> {
        self.train(data)?.forecast(horizons)
    }
}

/// The families of technique, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechniqueKind {
    MovingAverage,
    SimpleExponentialSmoothing,
    Holt,
    HoltWinters,
}

impl TechniqueKind {
    /// Fixed evaluation order. Earlier kinds win ties.
    pub const ORDER: [TechniqueKind; 4] = [
        TechniqueKind::MovingAverage,
        TechniqueKind::SimpleExponentialSmoothing,
        TechniqueKind::Holt,
        TechniqueKind::HoltWinters,
    ];

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            TechniqueKind::MovingAverage => "Moving Average",
            TechniqueKind::SimpleExponentialSmoothing => "Simple Exponential Smoothing",
            TechniqueKind::Holt => "Holt",
            TechniqueKind::HoltWinters => "Holt-Winters",
        }
    }

    /// Short label used in result messages
    pub fn abbreviation(self) -> &'static str {
        match self {
            TechniqueKind::MovingAverage => "MA",
            TechniqueKind::SimpleExponentialSmoothing => "SES",
            TechniqueKind::Holt => "Holt",
            TechniqueKind::HoltWinters => "HW",
        }
    }
}

impl fmt::Display for TechniqueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A technique together with its chosen parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "technique", rename_all = "snake_case")]
pub enum Technique {
    /// Recursive rolling-mean extrapolation
    MovingAverage { window: usize },
    /// Level-only exponential smoothing
    SimpleExponentialSmoothing { alpha: f64 },
    /// Linear-trend exponential smoothing
    Holt { alpha: f64, slope: f64 },
    /// Additive trend and season, weights fitted internally
    HoltWinters {
        season_count: usize,
        optimizer: NelderMeadConfig,
    },
}

impl Technique {
    /// Which family this technique belongs to
    pub fn kind(&self) -> TechniqueKind {
        match self {
            Technique::MovingAverage { .. } => TechniqueKind::MovingAverage,
            Technique::SimpleExponentialSmoothing { .. } => {
                TechniqueKind::SimpleExponentialSmoothing
            }
            Technique::Holt { .. } => TechniqueKind::Holt,
            Technique::HoltWinters { .. } => TechniqueKind::HoltWinters,
        }
    }

    /// Human readable name of the family
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Fit on `data` and forecast `horizons` periods past its end
    pub fn estimate(&self, data: &[f64], horizons: usize) -> Result<ForecastResult> {
        match *self {
            Technique::MovingAverage { window } => {
                moving_average::RollingMeanModel::new(window)?.estimate(data, horizons)
            }
            Technique::SimpleExponentialSmoothing { alpha } => {
                exponential_smoothing::SimpleExponentialSmoothing::new(alpha)?
                    .estimate(data, horizons)
            }
            Technique::Holt { alpha, slope } => {
                holt::HoltLinear::new(alpha, slope)?.estimate(data, horizons)
            }
            Technique::HoltWinters {
                season_count,
                optimizer,
            } => holt_winters::HoltWintersAdditive::new(season_count, optimizer)?
                .estimate(data, horizons),
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Technique::MovingAverage { window } => {
                write!(f, "{} (window={})", self.name(), window)
            }
            Technique::SimpleExponentialSmoothing { alpha } => {
                write!(f, "{} (alpha={:.2})", self.name(), alpha)
            }
            Technique::Holt { alpha, slope } => {
                write!(f, "{} (alpha={:.2}, slope={:.2})", self.name(), alpha, slope)
            }
            Technique::HoltWinters { season_count, .. } => {
                write!(f, "{} (seasons={})", self.name(), season_count)
            }
        }
    }
}

pub mod exponential_smoothing;
pub mod holt;
pub mod holt_winters;
pub mod moving_average;
