//! Technique selection by minimum held-out error
//!
//! Selection runs in two phases. The evaluation phase splits the series,
//! scores every technique with its best parameters, and the decision phase
//! picks the minimum error in the fixed order of [`TechniqueKind::ORDER`].

use crate::config::SelectionConfig;
use crate::data::Series;
use crate::error::{ForecastError, Result};
use crate::forecaster::{self, FinalForecast};
use crate::models::{Technique, TechniqueKind};
use crate::search::{self, TechniqueResult};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Index of the first minimum-error result. NaN errors are never the minimum.
pub fn pick_best(results: &[TechniqueResult]) -> Option<usize> {
    results
        .iter()
        .enumerate()
        .filter(|(_, result)| !result.rmse.is_nan())
        .fold(None, |best: Option<(usize, f64)>, (idx, result)| match best {
            Some((_, best_rmse)) if result.rmse >= best_rmse => best,
            _ => Some((idx, result.rmse)),
        })
        .map(|(idx, _)| idx)
}

/// Scored candidates and the chosen one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    candidates: Vec<TechniqueResult>,
    winner: usize,
}

impl Selection {
    /// Every technique's best result, in evaluation order
    pub fn candidates(&self) -> &[TechniqueResult] {
        &self.candidates
    }

    /// The winning result
    pub fn winner(&self) -> &TechniqueResult {
        &self.candidates[self.winner]
    }

    /// Result for one technique family
    pub fn result_for(&self, kind: TechniqueKind) -> Option<&TechniqueResult> {
        self.candidates.iter().find(|r| r.technique.kind() == kind)
    }
}

/// Everything a run produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport {
    /// Scores from the evaluation phase
    pub selection: Selection,
    /// Forward forecast from the winner refit on the entire series
    pub forecast: FinalForecast,
}

impl SelectionReport {
    /// Serialize the report as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SelectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Held-out RMSE per technique:")?;
        for result in self.selection.candidates() {
            writeln!(f, "  {:<48} {:.4}", result.technique.to_string(), result.rmse)?;
        }

        let kind = self.forecast.technique().kind();
        writeln!(f, "Best method for test data is {}.", kind)?;

        let label = match self.forecast.headline_date() {
            Some(date) => date.to_string(),
            None => format!("step {}", self.forecast.forecast().horizons()),
        };
        match self.forecast.headline() {
            Some(value) => write!(f, "{} estimate for {}: {:.4}", kind.abbreviation(), label, value),
            None => write!(f, "{} produced no estimate", kind.abbreviation()),
        }
    }
}

/// Runs the evaluation, decision and final forecast phases
#[derive(Debug, Clone)]
pub struct ModelSelector {
    config: SelectionConfig,
}

impl ModelSelector {
    /// Create a selector after validating its configuration
    pub fn new(config: SelectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Evaluation phase: best held-out result of every technique, in evaluation order
    pub fn evaluate(&self, series: &Series) -> Result<Vec<TechniqueResult>> {
        let config = &self.config;
        let split = series.split(config.test_size)?;
        let grid = search::linspace_grid(config.grid_points)?;
        debug!(
            train = split.train().len(),
            test = split.test().len(),
            grid_points = grid.len(),
            "Evaluating techniques"
        );

        let mut results = Vec::with_capacity(TechniqueKind::ORDER.len());
        for kind in TechniqueKind::ORDER {
            let result = match kind {
                TechniqueKind::MovingAverage => search::evaluate(
                    Technique::MovingAverage {
                        window: config.moving_average_window,
                    },
                    &split,
                )?,
                TechniqueKind::SimpleExponentialSmoothing => {
                    search::search_ses(&split, &grid, config.parallel_search)?
                }
                TechniqueKind::Holt => {
                    search::search_holt(&split, &grid, &grid, config.parallel_search)?
                }
                TechniqueKind::HoltWinters => search::evaluate(
                    Technique::HoltWinters {
                        season_count: config.season_count,
                        optimizer: config.optimizer,
                    },
                    &split,
                )?,
            };
            debug!(technique = %result.technique, rmse = result.rmse, "Technique scored");
            results.push(result);
        }

        Ok(results)
    }

    /// Evaluation and decision phases
    pub fn select(&self, series: &Series) -> Result<Selection> {
        let candidates = self.evaluate(series)?;
        let winner = pick_best(&candidates).ok_or_else(|| {
            ForecastError::NumericInstability(
                "No technique produced a finite error on the test set".to_string(),
            )
        })?;

        info!(
            technique = %candidates[winner].technique,
            rmse = candidates[winner].rmse,
            "Technique selected"
        );
        Ok(Selection { candidates, winner })
    }

    /// Full pipeline: select a technique, then refit it on the entire series
    pub fn run(&self, series: &Series) -> Result<SelectionReport> {
        let selection = self.select(series)?;
        let forecast = forecaster::refit(selection.winner().technique, series, self.config.horizon)?;

        Ok(SelectionReport {
            selection,
            forecast,
        })
    }
}
