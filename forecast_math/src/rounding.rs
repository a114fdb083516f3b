//! Rounding of forecast values

/// Number of decimal places every forecast value is rounded to
pub const FORECAST_DECIMALS: u32 = 4;

/// Round a value to a fixed number of decimal places, half away from zero.
///
/// Non-finite values are returned unchanged, as are values too large to
/// scale without overflowing.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Round every value of a slice to a fixed number of decimal places
pub fn round_all(values: &[f64], decimals: u32) -> Vec<f64> {
    values.iter().map(|&v| round_to(v, decimals)).collect()
}
