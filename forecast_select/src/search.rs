//! Brute-force parameter search over smoothing weights
//!
//! Every candidate is fitted on the training split, forecast over the test
//! horizon, and scored by RMSE against the held-out values. The best
//! candidate is carried through an explicit fold: a later candidate only
//! replaces it with a strictly lower error, and a NaN error never replaces
//! a finite one.

use crate::data::Split;
use crate::error::{ForecastError, Result};
use crate::models::{ForecastResult, Technique};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// A technique scored against the held-out test set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechniqueResult {
    /// Technique and its parameters
    pub technique: Technique,
    /// Forecast over the test horizon
    pub forecast: ForecastResult,
    /// Root mean squared error against the test set
    pub rmse: f64,
}

impl TechniqueResult {
    /// Whether this result should replace `best` in a running minimum
    fn improves_on(&self, best: &TechniqueResult) -> bool {
        self.rmse < best.rmse || (best.rmse.is_nan() && !self.rmse.is_nan())
    }
}

/// `points` values evenly spaced over [0, 1], endpoints included
pub fn linspace_grid(points: usize) -> Result<Vec<f64>> {
    match points {
        0 => Err(ForecastError::InvalidParameter(
            "A parameter grid needs at least one point".to_string(),
        )),
        1 => Ok(vec![0.0]),
        n => {
            let step = 1.0 / (n - 1) as f64;
            Ok((0..n).map(|i| i as f64 * step).collect())
        }
    }
}

/// Fit one technique on the training split and score it on the test split
pub fn evaluate(technique: Technique, split: &Split) -> Result<TechniqueResult> {
    let horizon = split.test().len();
    let forecast = technique.estimate(split.train(), horizon)?;
    let rmse = forecast.rmse(split.test())?;

    Ok(TechniqueResult {
        technique,
        forecast,
        rmse,
    })
}

/// Evaluate every candidate and keep the first minimum-error one
pub fn grid_search(
    candidates: &[Technique],
    split: &Split,
    parallel: bool,
) -> Result<TechniqueResult> {
    // Collecting preserves candidate order, so the fold below is the same
    // with or without the thread pool.
    let trials: Vec<TechniqueResult> = if parallel {
        candidates
            .par_iter()
            .map(|&technique| evaluate(technique, split))
            .collect::<Result<Vec<_>>>()?
    } else {
        candidates
            .iter()
            .map(|&technique| evaluate(technique, split))
            .collect::<Result<Vec<_>>>()?
    };

    let trial_count = trials.len();
    let best = trials
        .into_iter()
        .fold(None, |best: Option<TechniqueResult>, trial| match best {
            Some(best) if !trial.improves_on(&best) => Some(best),
            _ => Some(trial),
        })
        .ok_or_else(|| {
            ForecastError::InvalidParameter("Parameter search has no candidates".to_string())
        })?;

    debug!(
        trials = trial_count,
        best = %best.technique,
        rmse = best.rmse,
        "Grid search finished"
    );
    Ok(best)
}

/// Search the level weight of simple exponential smoothing
pub fn search_ses(split: &Split, alphas: &[f64], parallel: bool) -> Result<TechniqueResult> {
    let candidates: Vec<Technique> = alphas
        .iter()
        .map(|&alpha| Technique::SimpleExponentialSmoothing { alpha })
        .collect();

    grid_search(&candidates, split, parallel)
}

/// Search level and slope weights of Holt's method, alpha on the outer axis
pub fn search_holt(
    split: &Split,
    alphas: &[f64],
    slopes: &[f64],
    parallel: bool,
) -> Result<TechniqueResult> {
    let candidates: Vec<Technique> = alphas
        .iter()
        .flat_map(|&alpha| slopes.iter().map(move |&slope| Technique::Holt { alpha, slope }))
        .collect();

    grid_search(&candidates, split, parallel)
}
