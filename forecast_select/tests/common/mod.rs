#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 10, 11, 12, ... with `len` points
pub fn ramp(len: usize) -> Vec<f64> {
    (0..len).map(|t| 10.0 + t as f64).collect()
}

/// Wavy series with plenty of decimals
pub fn wavy(len: usize) -> Vec<f64> {
    (0..len)
        .map(|t| 100.0 + (t as f64 * 0.7).sin() * 3.3 + t as f64 / 7.0)
        .collect()
}

pub const SEASON_PATTERN: [f64; 10] = [0.0, 3.0, -3.0, 5.0, -5.0, 2.0, 8.0, -8.0, 8.0, -8.0];

/// Trend plus an additive 10-step season plus small seeded noise
pub fn seasonal(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|t| {
            50.0 + 0.2 * t as f64
                + SEASON_PATTERN[t % SEASON_PATTERN.len()]
                + rng.gen_range(-0.05..0.05)
        })
        .collect()
}

/// Random walk around 70, like a daily price series
pub fn random_walk(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut price = 70.0;
    (0..len)
        .map(|_| {
            price += rng.gen_range(-1.5..1.5);
            price
        })
        .collect()
}

pub fn is_four_decimals(value: f64) -> bool {
    ((value * 1e4).round() / 1e4 - value).abs() == 0.0
}
