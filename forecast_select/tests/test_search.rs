mod common;

use approx::assert_relative_eq;
use common::{ramp, random_walk};
use forecast_select::search::{evaluate, grid_search, linspace_grid, search_holt, search_ses};
use forecast_select::{ForecastError, Series, Technique};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_linspace_grid_default_resolution() {
    let grid = linspace_grid(11).unwrap();

    assert_eq!(grid.len(), 11);
    assert_eq!(grid[0], 0.0);
    assert_eq!(grid[10], 1.0);
    assert_relative_eq!(grid[8], 0.8, epsilon = 1e-12);
}

#[test]
fn test_linspace_grid_edge_sizes() {
    assert_eq!(linspace_grid(1).unwrap(), vec![0.0]);
    assert_eq!(linspace_grid(2).unwrap(), vec![0.0, 1.0]);
    assert!(matches!(
        linspace_grid(0),
        Err(ForecastError::InvalidParameter(_))
    ));
}

#[test]
fn test_evaluate_scores_against_test_split() {
    let split = Series::new("ramp", ramp(40)).split(4).unwrap();
    let result = evaluate(Technique::SimpleExponentialSmoothing { alpha: 1.0 }, &split).unwrap();

    // Flat at 45 against 46..=49
    assert_eq!(result.forecast.values(), &[45.0, 45.0, 45.0, 45.0]);
    assert_relative_eq!(result.rmse, 7.5f64.sqrt(), epsilon = 1e-12);
}

#[rstest]
#[case(0.0)]
#[case(0.3)]
#[case(0.9)]
fn test_single_point_ses_grid_matches_direct_evaluation(#[case] alpha: f64) {
    let split = Series::new("walk", random_walk(60, 9)).split(4).unwrap();

    let searched = search_ses(&split, &[alpha], false).unwrap();
    let direct = evaluate(Technique::SimpleExponentialSmoothing { alpha }, &split).unwrap();
    assert_eq!(searched, direct);
}

#[test]
fn test_single_point_holt_grid_matches_direct_evaluation() {
    let split = Series::new("walk", random_walk(60, 4)).split(4).unwrap();

    let searched = search_holt(&split, &[0.6], &[0.2], false).unwrap();
    let direct = evaluate(
        Technique::Holt {
            alpha: 0.6,
            slope: 0.2,
        },
        &split,
    )
    .unwrap();
    assert_eq!(searched, direct);
}

#[test]
fn test_ses_search_finds_highest_alpha_on_ramp() {
    let split = Series::new("ramp", ramp(40)).split(4).unwrap();
    let grid = linspace_grid(11).unwrap();
    let best = search_ses(&split, &grid, false).unwrap();

    assert_eq!(best.technique, Technique::SimpleExponentialSmoothing { alpha: 1.0 });
}

#[test]
fn test_ties_keep_first_candidate() {
    // Every weight reproduces a constant series exactly
    let split = Series::new("flat", vec![5.0; 30]).split(4).unwrap();
    let grid = linspace_grid(11).unwrap();

    let ses = search_ses(&split, &grid, false).unwrap();
    assert_eq!(ses.technique, Technique::SimpleExponentialSmoothing { alpha: 0.0 });
    assert_eq!(ses.rmse, 0.0);

    let holt = search_holt(&split, &grid, &grid, false).unwrap();
    assert_eq!(
        holt.technique,
        Technique::Holt {
            alpha: 0.0,
            slope: 0.0
        }
    );
}

#[test]
fn test_holt_search_scans_alpha_outer_slope_inner() {
    let split = Series::new("ramp", ramp(40)).split(4).unwrap();

    // Every candidate tracks the ramp exactly, so the first one wins
    let best = search_holt(&split, &[0.7, 0.2], &[0.9, 0.1], false).unwrap();
    assert_eq!(
        best.technique,
        Technique::Holt {
            alpha: 0.7,
            slope: 0.9
        }
    );
    assert_eq!(best.rmse, 0.0);
}

#[rstest]
#[case::nan_first(vec![100, 2])]
#[case::nan_last(vec![2, 100])]
fn test_nan_error_never_replaces_finite(#[case] windows: Vec<usize>) {
    let split = Series::new("walk", random_walk(40, 2)).split(4).unwrap();
    let candidates: Vec<Technique> = windows
        .into_iter()
        .map(|window| Technique::MovingAverage { window })
        .collect();

    let best = grid_search(&candidates, &split, false).unwrap();
    assert_eq!(best.technique, Technique::MovingAverage { window: 2 });
    assert!(best.rmse.is_finite());
}

#[test]
fn test_all_nan_candidates_keep_first() {
    let split = Series::new("short", ramp(12)).split(4).unwrap();
    let candidates = [
        Technique::MovingAverage { window: 50 },
        Technique::MovingAverage { window: 60 },
    ];

    let best = grid_search(&candidates, &split, false).unwrap();
    assert_eq!(best.technique, Technique::MovingAverage { window: 50 });
    assert!(best.rmse.is_nan());
}

#[test]
fn test_empty_candidate_list_is_rejected() {
    let split = Series::new("ramp", ramp(12)).split(4).unwrap();
    assert!(matches!(
        grid_search(&[], &split, false),
        Err(ForecastError::InvalidParameter(_))
    ));
}

#[test]
fn test_parallel_search_matches_sequential() {
    let split = Series::new("walk", random_walk(120, 21)).split(4).unwrap();
    let grid = linspace_grid(11).unwrap();

    let sequential = search_holt(&split, &grid, &grid, false).unwrap();
    let parallel = search_holt(&split, &grid, &grid, true).unwrap();
    assert_eq!(sequential, parallel);

    let sequential = search_ses(&split, &grid, false).unwrap();
    let parallel = search_ses(&split, &grid, true).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_fitting_failure_aborts_search() {
    let split = Series::new("tiny", vec![1.0, 2.0]).split(1).unwrap();
    let result = search_holt(&split, &[0.5], &[0.5], false);
    assert!(matches!(result, Err(ForecastError::InsufficientData(_))));
}
