use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::models::HistoricalRecord;
use crate::utils::ForecastError;

const DATE_COLUMN: &str = "Date";
const CLOSE_COLUMN: &str = "Close";

/// Load historical closing prices from a CSV file with `Date` and `Close` columns
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<Vec<HistoricalRecord>, ForecastError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ForecastError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_history(file)?;
    info!("Loaded {} historical prices from {}", records.len(), path.display());

    Ok(records)
}

/// Parse historical closing prices from any CSV source.
///
/// Extra columns are ignored. Rows whose close is empty or `null` are skipped;
/// anything else that fails to parse, or parses to `inf`/`NaN`, is an error.
/// Records come back sorted by date.
pub fn parse_history<R: Read>(reader: R) -> Result<Vec<HistoricalRecord>, ForecastError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let date_idx = column_index(&headers, DATE_COLUMN)?;
    let close_idx = column_index(&headers, CLOSE_COLUMN)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        let raw_date = row.get(date_idx).unwrap_or_default();
        let date = parse_date(raw_date).ok_or_else(|| ForecastError::InvalidRow {
            line,
            reason: format!("unparseable date '{}'", raw_date),
        })?;

        let raw_close = row.get(close_idx).unwrap_or_default();
        if raw_close.is_empty() || raw_close.eq_ignore_ascii_case("null") {
            skipped += 1;
            continue;
        }
        let close: f64 = raw_close.parse().map_err(|_| ForecastError::InvalidRow {
            line,
            reason: format!("non-numeric close '{}'", raw_close),
        })?;
        if !close.is_finite() {
            return Err(ForecastError::InvalidRow {
                line,
                reason: format!("non-finite close '{}'", raw_close),
            });
        }

        records.push(HistoricalRecord { date, close });
    }

    if skipped > 0 {
        warn!("Skipped {} historical rows with no closing price", skipped);
    }

    records.sort_by_key(|r| r.date);
    debug!("Parsed {} historical records", records.len());

    Ok(records)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, ForecastError> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}') == name)
        .ok_or_else(|| ForecastError::MissingColumn(name.to_string()))
}

/// Accepts plain dates, date-times with or without an offset, and US-style dates
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%z") {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%m/%d/%Y").ok()
}
