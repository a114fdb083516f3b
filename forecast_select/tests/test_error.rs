use forecast_math::MathError;
use forecast_select::ForecastError;
use std::io;

#[test]
fn test_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let forecast_error = ForecastError::from(io_error);
    assert!(matches!(forecast_error, ForecastError::IoError(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(
        ForecastError::from(json_error),
        ForecastError::SerializationError(_)
    ));
}

#[test]
fn test_math_errors_map_to_pipeline_kinds() {
    assert!(matches!(
        ForecastError::from(MathError::InsufficientData("short".to_string())),
        ForecastError::InsufficientData(_)
    ));
    assert!(matches!(
        ForecastError::from(MathError::DimensionMismatch {
            expected: 4,
            actual: 3
        }),
        ForecastError::DimensionMismatch {
            expected: 4,
            actual: 3
        }
    ));
    assert!(matches!(
        ForecastError::from(MathError::InvalidInput("alpha".to_string())),
        ForecastError::InvalidParameter(_)
    ));
    assert!(matches!(
        ForecastError::from(MathError::CalculationError("diverged".to_string())),
        ForecastError::NumericInstability(_)
    ));
}

#[test]
fn test_error_display() {
    let error = ForecastError::InvalidParameter("alpha must be between 0 and 1".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid parameter: alpha must be between 0 and 1"
    );

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error_string = ForecastError::from(io_error).to_string();
    assert!(error_string.contains("IO error"));
    assert!(error_string.contains("permission denied"));

    let error = ForecastError::DimensionMismatch {
        expected: 4,
        actual: 2,
    };
    assert_eq!(error.to_string(), "Dimension mismatch: expected 4 values, got 2");
}
