//! Selection configuration
//!
//! Every knob has the default used for the crude oil price study this
//! tool was built around. A TOML file may override any subset of them.

use crate::data::CsvOptions;
use crate::error::{ForecastError, Result};
use forecast_math::optimize::NelderMeadConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the model-selection pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Number of most recent points held out for scoring
    pub test_size: usize,
    /// Number of points forecast by the winning technique
    pub horizon: usize,
    /// Window of the rolling-mean baseline
    pub moving_average_window: usize,
    /// Candidate values per smoothing axis, spread evenly over [0, 1]
    pub grid_points: usize,
    /// Seasonal cycle length for Holt-Winters
    pub season_count: usize,
    /// Evaluate grid candidates on the rayon thread pool
    pub parallel_search: bool,
    /// Optimiser settings for the Holt-Winters weights
    pub optimizer: NelderMeadConfig,
    /// Column of the input file holding observation dates
    pub date_column: Option<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            test_size: 4,
            horizon: 4,
            moving_average_window: 30,
            grid_points: 11,
            season_count: 10,
            parallel_search: false,
            optimizer: NelderMeadConfig::default(),
            date_column: None,
        }
    }
}

impl SelectionConfig {
    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SelectionConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Loader options for the input file
    pub fn csv_options(&self) -> CsvOptions {
        CsvOptions {
            date_column: self.date_column.clone(),
            ..CsvOptions::default()
        }
    }

    /// Check that every size is usable
    pub fn validate(&self) -> Result<()> {
        if self.test_size == 0 {
            return Err(ForecastError::ConfigError(
                "test_size must be at least 1".to_string(),
            ));
        }
        if self.horizon == 0 {
            return Err(ForecastError::ConfigError(
                "horizon must be at least 1".to_string(),
            ));
        }
        if self.moving_average_window == 0 {
            return Err(ForecastError::ConfigError(
                "moving_average_window must be at least 1".to_string(),
            ));
        }
        if self.grid_points == 0 {
            return Err(ForecastError::ConfigError(
                "grid_points must be at least 1".to_string(),
            ));
        }
        if self.season_count < 2 {
            return Err(ForecastError::ConfigError(format!(
                "season_count must be at least 2, got {}",
                self.season_count
            )));
        }
        if self.optimizer.max_iter == 0 || !self.optimizer.tolerance.is_finite() {
            return Err(ForecastError::ConfigError(
                "optimizer needs a positive max_iter and a finite tolerance".to_string(),
            ));
        }
        Ok(())
    }
}
