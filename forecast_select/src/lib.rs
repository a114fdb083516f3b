//! # Forecast Select
//!
//! Picks, among several univariate forecasting techniques, the one that
//! best predicts a short horizon of a numeric series, then refits the
//! winner on the full series to produce the forward forecast.
//!
//! ## Techniques
//!
//! Evaluated in this order, which also breaks ties:
//!
//! - **Moving Average**: recursive rolling-mean extrapolation
//! - **Simple Exponential Smoothing**: level only, alpha grid-searched
//! - **Holt**: linear trend, alpha and slope grid-searched
//! - **Holt-Winters**: additive trend and season, weights fitted internally
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use forecast_select::data::{CsvOptions, SeriesLoader};
//! use forecast_select::{ModelSelector, SelectionConfig};
//!
//! # fn main() -> forecast_select::Result<()> {
//! // Load one column of a semicolon-delimited file
//! let series = SeriesLoader::from_csv("prices.csv", "WTI", &CsvOptions::default())?;
//!
//! // Score every technique on the last 4 points, then forecast 4 points ahead
//! let selector = ModelSelector::new(SelectionConfig::default())?;
//! let report = selector.run(&series)?;
//!
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod forecaster;
pub mod models;
pub mod search;
pub mod selection;

// Re-export commonly used types
pub use crate::config::SelectionConfig;
pub use crate::data::{Series, SeriesLoader, Split};
pub use crate::error::{ForecastError, Result};
pub use crate::forecaster::FinalForecast;
pub use crate::models::{ForecastModel, ForecastResult, Technique, TechniqueKind};
pub use crate::search::TechniqueResult;
pub use crate::selection::{ModelSelector, Selection, SelectionReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
