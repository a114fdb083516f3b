//! Exponential smoothing implementations for time series forecasting
//!
//! Contains implementations of the exponential smoothing family:
//! - Simple Exponential Smoothing (level only)
//! - Double Exponential Smoothing (Holt's linear trend)
//! - Triple Exponential Smoothing (additive Holt-Winters)
//!
//! All smoothing weights are accepted on the closed interval [0, 1].

use crate::metrics::sum_squared_error;
use crate::{check_unit_interval, MathError, Result};

/// Exponential Smoothing implementation
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    alpha: f64,
    level: Option<f64>,
    values_seen: usize,
}

impl ExponentialSmoothing {
    /// Create a new Exponential Smoothing with the specified alpha (smoothing factor)
    pub fn new(alpha: f64) -> Result<Self> {
        check_unit_interval("Alpha", alpha)?;

        Ok(Self {
            alpha,
            level: None,
            values_seen: 0,
        })
    }

    /// Update the Exponential Smoothing with a new value
    pub fn update(&mut self, value: f64) {
        self.values_seen += 1;

        self.level = Some(match self.level {
            // First value seeds the level
            None => value,
            Some(level) => self.alpha * value + (1.0 - self.alpha) * level,
        });
    }

    /// Get the current smoothed value
    pub fn value(&self) -> Result<f64> {
        self.level.ok_or_else(|| {
            MathError::InsufficientData("No data available for exponential smoothing".to_string())
        })
    }

    /// Forecast `h` steps ahead. Without trend or season every step is the last level.
    pub fn forecast(&self, _h: usize) -> Result<f64> {
        self.value()
    }

    /// Get the current alpha value
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Number of observations seen so far
    pub fn values_seen(&self) -> usize {
        self.values_seen
    }
}

/// Double Exponential Smoothing (Holt's Method) implementation
#[derive(Debug, Clone)]
pub struct DoubleExponentialSmoothing {
    alpha: f64,
    beta: f64,
    level: Option<f64>,
    trend: Option<f64>,
}

impl DoubleExponentialSmoothing {
    /// Create a new Double Exponential Smoothing with the specified parameters
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        check_unit_interval("Alpha", alpha)?;
        check_unit_interval("Beta", beta)?;

        Ok(Self {
            alpha,
            beta,
            level: None,
            trend: None,
        })
    }

    /// Update the Double Exponential Smoothing with a new value
    ///
    /// The first value seeds the level and the second seeds the trend as
    /// the first difference.
    pub fn update(&mut self, value: f64) {
        match (self.level, self.trend) {
            (None, _) => {
                self.level = Some(value);
            }
            (Some(prev_level), None) => {
                self.trend = Some(value - prev_level);
                self.level = Some(value);
            }
            (Some(prev_level), Some(prev_trend)) => {
                let new_level =
                    self.alpha * value + (1.0 - self.alpha) * (prev_level + prev_trend);
                let new_trend =
                    self.beta * (new_level - prev_level) + (1.0 - self.beta) * prev_trend;

                self.level = Some(new_level);
                self.trend = Some(new_trend);
            }
        }
    }

    /// Forecast h steps ahead
    pub fn forecast(&self, h: usize) -> Result<f64> {
        match (self.level, self.trend) {
            (Some(level), Some(trend)) => Ok(level + (h as f64) * trend),
            _ => Err(MathError::InsufficientData(
                "Need at least 2 observations to estimate a trend".to_string(),
            )),
        }
    }

    /// Get the current level
    pub fn level(&self) -> Result<f64> {
        self.level.ok_or_else(|| {
            MathError::InsufficientData("Level not calculated yet".to_string())
        })
    }

    /// Get the current trend
    pub fn trend(&self) -> Result<f64> {
        self.trend.ok_or_else(|| {
            MathError::InsufficientData("Trend not calculated yet".to_string())
        })
    }
}

/// Smoothing weights of a Holt-Winters model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoltWintersWeights {
    /// Level smoothing
    pub alpha: f64,
    /// Trend smoothing
    pub beta: f64,
    /// Seasonal smoothing
    pub gamma: f64,
}

/// Triple Exponential Smoothing with additive trend and additive season
///
/// ```text
/// Level:    L_t = α (x_t - S_{t-m}) + (1 - α)(L_{t-1} + T_{t-1})
/// Trend:    T_t = β (L_t - L_{t-1}) + (1 - β) T_{t-1}
/// Season:   S_t = γ (x_t - L_t) + (1 - γ) S_{t-m}
/// Forecast: F_{t+h} = L_t + h T_t + S_{t-m+h_m}
/// ```
#[derive(Debug, Clone)]
pub struct AdditiveHoltWinters {
    weights: HoltWintersWeights,
    period: usize,
}

/// State of a fitted additive Holt-Winters model
#[derive(Debug, Clone)]
pub struct HoltWintersFit {
    /// Level estimates, one per observation
    pub level: Vec<f64>,
    /// Trend estimates, one per observation
    pub trend: Vec<f64>,
    /// Seasonal components, one per observation
    pub seasonal: Vec<f64>,
    /// One-step-ahead in-sample forecasts
    pub fitted: Vec<f64>,
    period: usize,
}

impl AdditiveHoltWinters {
    /// Create a new additive Holt-Winters smoother
    pub fn new(weights: HoltWintersWeights, period: usize) -> Result<Self> {
        check_unit_interval("Alpha", weights.alpha)?;
        check_unit_interval("Beta", weights.beta)?;
        check_unit_interval("Gamma", weights.gamma)?;
        if period < 2 {
            return Err(MathError::InvalidInput(
                "Seasonal period must be at least 2".to_string(),
            ));
        }

        Ok(Self { weights, period })
    }

    /// Get the seasonal period
    pub fn period(&self) -> usize {
        self.period
    }

    /// Get the smoothing weights
    pub fn weights(&self) -> HoltWintersWeights {
        self.weights
    }

    /// Smooth the whole series. Requires at least two full seasonal cycles.
    pub fn fit(&self, data: &[f64]) -> Result<HoltWintersFit> {
        let m = self.period;
        let n = data.len();
        if n < 2 * m {
            return Err(MathError::InsufficientData(format!(
                "Holt-Winters with period {} needs at least {} observations, got {}",
                m,
                2 * m,
                n
            )));
        }

        let HoltWintersWeights { alpha, beta, gamma } = self.weights;

        // Initial state from the first two cycles, with the level centred
        // on the last point of the first cycle.
        let first_mean = data[..m].iter().sum::<f64>() / m as f64;
        let second_mean = data[m..2 * m].iter().sum::<f64>() / m as f64;
        let t0 = (second_mean - first_mean) / m as f64;
        let centre = (m as f64 - 1.0) / 2.0;

        let mut level = vec![0.0; n];
        let mut trend = vec![0.0; n];
        let mut seasonal = vec![0.0; n];
        let mut fitted = vec![0.0; n];

        for i in 0..m {
            let local_level = first_mean + (i as f64 - centre) * t0;
            seasonal[i] = data[i] - local_level;
            level[i] = local_level;
            trend[i] = t0;
            fitted[i] = data[i];
        }

        for t in m..n {
            let s_prev = seasonal[t - m];
            let l = alpha * (data[t] - s_prev) + (1.0 - alpha) * (level[t - 1] + trend[t - 1]);
            let b = beta * (l - level[t - 1]) + (1.0 - beta) * trend[t - 1];
            let s = gamma * (data[t] - l) + (1.0 - gamma) * s_prev;

            fitted[t] = level[t - 1] + trend[t - 1] + s_prev;
            level[t] = l;
            trend[t] = b;
            seasonal[t] = s;
        }

        Ok(HoltWintersFit {
            level,
            trend,
            seasonal,
            fitted,
            period: m,
        })
    }
}

impl HoltWintersFit {
    /// Forecast `h` steps (1-indexed) past the last observation
    pub fn forecast(&self, h: usize) -> Result<f64> {
        if h == 0 {
            return Err(MathError::InvalidInput(
                "Forecast step must be at least 1".to_string(),
            ));
        }
        let n = self.level.len();
        let idx = n - self.period + ((h - 1) % self.period);

        Ok(self.level[n - 1] + h as f64 * self.trend[n - 1] + self.seasonal[idx])
    }

    /// Sum of squared one-step-ahead errors after the initial cycle
    pub fn sse(&self, data: &[f64]) -> Result<f64> {
        if data.len() != self.fitted.len() {
            return Err(MathError::DimensionMismatch {
                expected: self.fitted.len(),
                actual: data.len(),
            });
        }
        sum_squared_error(&data[self.period..], &self.fitted[self.period..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_exponential_smoothing() {
        let mut es = ExponentialSmoothing::new(0.3).unwrap();

        es.update(10.0); // Initial level = 10
        assert!((es.value().unwrap() - 10.0).abs() < 0.001);

        es.update(20.0); // New level = 0.3*20 + 0.7*10 = 13
        assert!((es.value().unwrap() - 13.0).abs() < 0.001);

        // Forecast is flat at the current level
        assert_eq!(es.forecast(1).unwrap(), es.forecast(4).unwrap());
        assert_eq!(es.values_seen(), 2);
    }

    #[test]
    fn test_exponential_smoothing_boundary_alphas() {
        let mut frozen = ExponentialSmoothing::new(0.0).unwrap();
        let mut naive = ExponentialSmoothing::new(1.0).unwrap();
        for v in [5.0, 7.0, 9.0] {
            frozen.update(v);
            naive.update(v);
        }
        assert_eq!(frozen.value().unwrap(), 5.0);
        assert_eq!(naive.value().unwrap(), 9.0);
    }

    #[test]
    fn test_exponential_smoothing_without_data() {
        let es = ExponentialSmoothing::new(0.5).unwrap();
        assert!(es.value().is_err());
        assert!(ExponentialSmoothing::new(1.5).is_err());
    }

    #[test]
    fn test_double_exponential_smoothing() {
        let mut des = DoubleExponentialSmoothing::new(0.4, 0.3).unwrap();

        des.update(10.0);
        assert!(des.forecast(1).is_err());

        des.update(12.0);
        assert_eq!(des.level().unwrap(), 12.0);
        assert_eq!(des.trend().unwrap(), 2.0);

        // level = 0.4*13 + 0.6*14 = 13.6, trend = 0.3*1.6 + 0.7*2 = 1.88
        des.update(13.0);
        assert_abs_diff_eq!(des.level().unwrap(), 13.6, epsilon = 1e-12);
        assert_abs_diff_eq!(des.trend().unwrap(), 1.88, epsilon = 1e-12);
        assert_abs_diff_eq!(des.forecast(2).unwrap(), 17.36, epsilon = 1e-12);
    }

    #[test]
    fn test_holt_tracks_exact_line() {
        let mut des = DoubleExponentialSmoothing::new(0.0, 0.0).unwrap();
        for t in 0..20 {
            des.update(10.0 + t as f64);
        }
        assert_abs_diff_eq!(des.forecast(4).unwrap(), 33.0, epsilon = 1e-9);
    }

    fn seasonal_additive_data() -> Vec<f64> {
        // Base trend: 100 + 2*t with seasonal pattern [10, -5, -5, 0]
        let pattern = [10.0, -5.0, -5.0, 0.0];
        (0..24)
            .map(|t| 100.0 + 2.0 * t as f64 + pattern[t % 4])
            .collect()
    }

    #[test]
    fn test_holt_winters_reproduces_clean_seasonal_series() {
        let data = seasonal_additive_data();
        let weights = HoltWintersWeights {
            alpha: 0.5,
            beta: 0.1,
            gamma: 0.1,
        };
        let hw = AdditiveHoltWinters::new(weights, 4).unwrap();
        let fit = hw.fit(&data).unwrap();

        assert_abs_diff_eq!(fit.sse(&data).unwrap(), 0.0, epsilon = 1e-9);
        for h in 1..=4 {
            let t = 23 + h;
            let expected = 100.0 + 2.0 * t as f64 + [10.0, -5.0, -5.0, 0.0][t % 4];
            assert_abs_diff_eq!(fit.forecast(h).unwrap(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_holt_winters_needs_two_cycles() {
        let weights = HoltWintersWeights {
            alpha: 0.3,
            beta: 0.1,
            gamma: 0.1,
        };
        let hw = AdditiveHoltWinters::new(weights, 10).unwrap();
        let result = hw.fit(&[1.0; 19]);
        assert!(matches!(result, Err(MathError::InsufficientData(_))));
    }

    #[test]
    fn test_holt_winters_parameter_validation() {
        let weights = HoltWintersWeights {
            alpha: 0.3,
            beta: 0.1,
            gamma: 0.1,
        };
        assert!(AdditiveHoltWinters::new(weights, 1).is_err());
        let bad = HoltWintersWeights { gamma: 2.0, ..weights };
        assert!(AdditiveHoltWinters::new(bad, 4).is_err());
    }
}
