//! # Forecast Select Workspace
//!
//! Facade over the workspace crates:
//!
//! - [`forecast_math`]: error metric, rounding, smoothing recursions and
//!   the Nelder-Mead minimiser
//! - [`forecast_select`]: series loading, techniques, parameter search,
//!   selection and the final forecast
//!
//! ## Example
//!
//! ```
//! use forecast_select_workspace::prelude::*;
//!
//! let values: Vec<f64> = (0..40).map(|t| 10.0 + t as f64).collect();
//! let series = Series::new("ramp", values);
//!
//! let report = ModelSelector::new(SelectionConfig::default())
//!     .unwrap()
//!     .run(&series)
//!     .unwrap();
//! assert_eq!(report.forecast.technique().kind(), TechniqueKind::Holt);
//! assert_eq!(report.forecast.headline(), Some(53.0));
//! ```

pub use forecast_math;
pub use forecast_select;

/// Commonly used types from every workspace crate
pub mod prelude {
    pub use forecast_math::{rmse, round_to, MathError};
    pub use forecast_select::{
        ForecastError, ModelSelector, SelectionConfig, SelectionReport, Series, Technique,
        TechniqueKind,
    };
}
