//! Final refit of the winning technique on the entire series

use crate::data::Series;
use crate::error::Result;
use crate::models::{ForecastResult, Technique};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

/// Forward forecast from the winning technique
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalForecast {
    technique: Technique,
    forecast: ForecastResult,
}

impl FinalForecast {
    /// Technique and parameters the forecast was made with
    pub fn technique(&self) -> &Technique {
        &self.technique
    }

    /// All forecast points
    pub fn forecast(&self) -> &ForecastResult {
        &self.forecast
    }

    /// The furthest forecast point, the headline result
    pub fn headline(&self) -> Option<f64> {
        self.forecast.last()
    }

    /// Date of the headline point, when the series is dated
    pub fn headline_date(&self) -> Option<NaiveDate> {
        self.forecast.dates().and_then(|dates| dates.last().copied())
    }
}

/// Re-fit `technique` on every observation of `series` and forecast `horizon` points.
///
/// No points are held out, so no error is computed.
pub fn refit(technique: Technique, series: &Series, horizon: usize) -> Result<FinalForecast> {
    let mut forecast = technique.estimate(series.values(), horizon)?;
    if let Some(dates) = series.future_dates(horizon) {
        forecast = forecast.with_dates(dates)?;
    }

    info!(
        technique = %technique,
        observations = series.len(),
        horizon,
        headline = ?forecast.last(),
        "Final forecast computed"
    );

    Ok(FinalForecast {
        technique,
        forecast,
    })
}
