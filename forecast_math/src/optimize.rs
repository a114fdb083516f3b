//! Bounded Nelder-Mead simplex minimisation
//!
//! Used to fit smoothing weights that are not searched on a grid. The
//! search is fully deterministic: the same objective and start point
//! always produce the same result.

use serde::{Deserialize, Serialize};

/// Settings for the Nelder-Mead minimiser
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NelderMeadConfig {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Convergence tolerance on the spread of objective values
    pub tolerance: f64,
    /// Offset applied to each coordinate to build the initial simplex
    pub initial_step: f64,
}

impl Default for NelderMeadConfig {
    fn default() -> Self {
        Self {
            max_iter: 500,
            tolerance: 1e-8,
            initial_step: 0.1,
        }
    }
}

/// Outcome of a Nelder-Mead run
#[derive(Debug, Clone, PartialEq)]
pub struct NelderMeadResult {
    /// Best point found
    pub optimal_point: Vec<f64>,
    /// Objective value at the best point
    pub optimal_value: f64,
    /// Iterations performed
    pub iterations: usize,
    /// Whether the tolerance was reached before `max_iter`
    pub converged: bool,
}

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

fn clamp_point(point: &mut [f64], bounds: Option<&[(f64, f64)]>) {
    if let Some(bounds) = bounds {
        for (x, &(lo, hi)) in point.iter_mut().zip(bounds.iter()) {
            *x = x.clamp(lo, hi);
        }
    }
}

fn evaluate<F>(objective: &F, point: &[f64]) -> f64
where
    F: Fn(&[f64]) -> f64,
{
    let value = objective(point);
    if value.is_finite() {
        value
    } else {
        f64::INFINITY
    }
}

/// Minimise `objective` starting from `start`.
///
/// Points are clamped into `bounds` (one `(low, high)` pair per
/// coordinate) before every evaluation. Non-finite objective values count
/// as +infinity.
pub fn nelder_mead<F>(
    objective: F,
    start: &[f64],
    bounds: Option<&[(f64, f64)]>,
    config: NelderMeadConfig,
) -> NelderMeadResult
where
    F: Fn(&[f64]) -> f64,
{
    let dim = start.len();
    if dim == 0 {
        return NelderMeadResult {
            optimal_point: Vec::new(),
            optimal_value: evaluate(&objective, &[]),
            iterations: 0,
            converged: true,
        };
    }

    let mut origin = start.to_vec();
    clamp_point(&mut origin, bounds);

    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
    simplex.push(origin.clone());
    for i in 0..dim {
        let mut vertex = origin.clone();
        // Step away from an upper bound instead of clamping onto the origin
        let stepped = vertex[i] + config.initial_step;
        vertex[i] = match bounds.map(|b| b[i].1) {
            Some(hi) if stepped > hi => vertex[i] - config.initial_step,
            _ => stepped,
        };
        clamp_point(&mut vertex, bounds);
        simplex.push(vertex);
    }
    let mut values: Vec<f64> = simplex.iter().map(|p| evaluate(&objective, p)).collect();

    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iter {
        // Order vertices best to worst; ties keep their earlier position
        let mut order: Vec<usize> = (0..=dim).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
        simplex = order.iter().map(|&i| simplex[i].clone()).collect();
        values = order.iter().map(|&i| values[i]).collect();

        let spread = values[dim] - values[0];
        if spread.abs() <= config.tolerance || (values[0].is_infinite() && values[dim].is_infinite()) {
            converged = true;
            break;
        }
        iterations += 1;

        let mut centroid = vec![0.0; dim];
        for vertex in &simplex[..dim] {
            for (c, x) in centroid.iter_mut().zip(vertex.iter()) {
                *c += x / dim as f64;
            }
        }

        let towards = |coef: f64| -> Vec<f64> {
            let mut point: Vec<f64> = centroid
                .iter()
                .zip(simplex[dim].iter())
                .map(|(c, w)| c + coef * (c - w))
                .collect();
            clamp_point(&mut point, bounds);
            point
        };

        let reflected = towards(REFLECTION);
        let reflected_value = evaluate(&objective, &reflected);

        if reflected_value < values[0] {
            let expanded = towards(EXPANSION);
            let expanded_value = evaluate(&objective, &expanded);
            if expanded_value < reflected_value {
                simplex[dim] = expanded;
                values[dim] = expanded_value;
            } else {
                simplex[dim] = reflected;
                values[dim] = reflected_value;
            }
            continue;
        }

        if reflected_value < values[dim - 1] {
            simplex[dim] = reflected;
            values[dim] = reflected_value;
            continue;
        }

        let contracted = if reflected_value < values[dim] {
            towards(CONTRACTION)
        } else {
            towards(-CONTRACTION)
        };
        let contracted_value = evaluate(&objective, &contracted);
        if contracted_value < values[dim].min(reflected_value) {
            simplex[dim] = contracted;
            values[dim] = contracted_value;
            continue;
        }

        // Shrink every vertex towards the best one
        let best = simplex[0].clone();
        for i in 1..=dim {
            let mut point: Vec<f64> = best
                .iter()
                .zip(simplex[i].iter())
                .map(|(b, x)| b + SHRINK * (x - b))
                .collect();
            clamp_point(&mut point, bounds);
            values[i] = evaluate(&objective, &point);
            simplex[i] = point;
        }
    }

    let best = (0..=dim)
        .min_by(|&a, &b| values[a].total_cmp(&values[b]))
        .unwrap_or(0);

    NelderMeadResult {
        optimal_point: simplex[best].clone(),
        optimal_value: values[best],
        iterations,
        converged,
    }
}
