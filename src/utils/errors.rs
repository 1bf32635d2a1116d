use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while predicting, loading history, or rendering output
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Date {date} is {days} days before the model epoch; a negative day count has no real power")]
    Domain { date: NaiveDate, days: i64 },
    #[error("Start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("Range {start} to {end} covers {days} days; at most {max} days can be predicted at once")]
    RangeTooLong { start: NaiveDate, end: NaiveDate, days: i64, max: i64 },
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),
    #[error("No calendar date exists for {year}-{month:02}")]
    InvalidDate { year: i32, month: u32 },
    #[error("Predicted price for {date} is not representable as a finite number")]
    Overflow { date: NaiveDate },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Historical data is missing the '{0}' column")]
    MissingColumn(String),
    #[error("Invalid historical row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Chart rendering failed: {0}")]
    Chart(String),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
