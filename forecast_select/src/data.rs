//! Time series data handling for forecasting

use crate::error::{ForecastError, Result};
use chrono::{Duration, NaiveDate};
use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use statrs::statistics::Statistics;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// An ordered, gap-free numeric series
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Name of the column the values came from
    name: String,
    /// Observations in time order
    values: Vec<f64>,
    /// Observation dates, when the source provides them
    dates: Option<Vec<NaiveDate>>,
}

/// Training prefix and held-out suffix of a series
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    train: Vec<f64>,
    test: Vec<f64>,
}

/// Descriptive statistics of a series
#[derive(Debug, Clone, Serialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Series {
    /// Create a series without dates
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            dates: None,
        }
    }

    /// Create a series with one date per observation
    pub fn with_dates(
        name: impl Into<String>,
        values: Vec<f64>,
        dates: Vec<NaiveDate>,
    ) -> Result<Self> {
        if values.len() != dates.len() {
            return Err(ForecastError::DataError(format!(
                "Values length ({}) doesn't match dates length ({})",
                values.len(),
                dates.len()
            )));
        }

        Ok(Self {
            name: name.into(),
            values,
            dates: Some(dates),
        })
    }

    /// Get the column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the observations
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the observation dates, if available
    pub fn dates(&self) -> Option<&[NaiveDate]> {
        self.dates.as_deref()
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Split off the last `test_size` observations as a held-out test set
    pub fn split(&self, test_size: usize) -> Result<Split> {
        if test_size == 0 {
            return Err(ForecastError::InvalidParameter(
                "Test size must be at least 1".to_string(),
            ));
        }
        if test_size >= self.values.len() {
            return Err(ForecastError::InsufficientData(format!(
                "Cannot hold out {} points from a series of {}",
                test_size,
                self.values.len()
            )));
        }

        let train_size = self.values.len() - test_size;
        Ok(Split {
            train: self.values[..train_size].to_vec(),
            test: self.values[train_size..].to_vec(),
        })
    }

    /// Dates of the next `horizon` observations.
    ///
    /// Continues from the last date using the spacing between the last
    /// two dates. Returns `None` without dates or with fewer than two.
    pub fn future_dates(&self, horizon: usize) -> Option<Vec<NaiveDate>> {
        let dates = self.dates.as_ref()?;
        if dates.len() < 2 {
            return None;
        }
        let last = dates[dates.len() - 1];
        let step: Duration = last - dates[dates.len() - 2];
        if step <= Duration::zero() {
            return None;
        }

        let mut current = last;
        let mut future = Vec::with_capacity(horizon);
        for _ in 0..horizon {
            current += step;
            future.push(current);
        }
        Some(future)
    }

    /// Descriptive statistics of the observations
    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary {
            count: self.values.len(),
            mean: self.values.iter().mean(),
            std_dev: self.values.iter().std_dev(),
            min: Statistics::min(self.values.iter()),
            max: Statistics::max(self.values.iter()),
        }
    }
}

impl Split {
    /// Training observations
    pub fn train(&self) -> &[f64] {
        &self.train
    }

    /// Held-out observations
    pub fn test(&self) -> &[f64] {
        &self.test
    }
}

/// Options for reading a delimited file
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: u8,
    /// Whether the first row holds column names
    pub has_headers: bool,
    /// Column holding observation dates
    pub date_column: Option<String>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            has_headers: true,
            date_column: None,
        }
    }
}

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y", "%d/%m/%Y"];

fn parse_date(field: &str) -> Result<NaiveDate> {
    let field = field.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(field, format).ok())
        .ok_or_else(|| ForecastError::DataError(format!("Unrecognised date: {}", field)))
}

/// Data loader for delimited series files
#[derive(Debug)]
pub struct SeriesLoader;

impl SeriesLoader {
    /// Load one numeric column of a delimited file
    pub fn from_csv<P: AsRef<Path>>(path: P, column: &str, options: &CsvOptions) -> Result<Series> {
        let file = File::open(path)?;
        Self::from_reader(file, column, options)
    }

    /// Load one numeric column from any reader
    pub fn from_reader<R: Read>(reader: R, column: &str, options: &CsvOptions) -> Result<Series> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(options.has_headers)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = if options.has_headers {
            rdr.headers()?.clone()
        } else {
            StringRecord::new()
        };
        let value_idx = Self::column_index(&headers, column, options.has_headers)?;
        let date_idx = match &options.date_column {
            Some(name) => Some(Self::column_index(&headers, name, options.has_headers)?),
            None => None,
        };

        let mut values = Vec::new();
        let mut dates = Vec::new();
        for (row, record) in rdr.records().enumerate() {
            let record = record?;
            let field = record.get(value_idx).ok_or_else(|| {
                ForecastError::DataError(format!("Row {} has no column {}", row + 1, column))
            })?;
            let value: f64 = field.parse().map_err(|_| {
                ForecastError::DataError(format!(
                    "Row {}: cannot parse '{}' in column {} as a number",
                    row + 1,
                    field,
                    column
                ))
            })?;
            values.push(value);

            if let Some(idx) = date_idx {
                let field = record.get(idx).ok_or_else(|| {
                    ForecastError::DataError(format!("Row {} has no date field", row + 1))
                })?;
                dates.push(parse_date(field)?);
            }
        }

        if values.is_empty() {
            return Err(ForecastError::DataError(format!(
                "No observations found in column {}",
                column
            )));
        }
        debug!(column, observations = values.len(), "Loaded series");

        match date_idx {
            Some(_) => Series::with_dates(column, values, dates),
            None => Ok(Series::new(column, values)),
        }
    }

    /// Resolve a column by header name, or by zero-based index without headers
    fn column_index(headers: &StringRecord, column: &str, has_headers: bool) -> Result<usize> {
        if has_headers {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| ForecastError::DataError(format!("Column not found: {}", column)))
        } else {
            column.parse::<usize>().map_err(|_| {
                ForecastError::DataError(format!(
                    "Without headers, columns are selected by index, got '{}'",
                    column
                ))
            })
        }
    }
}
