use chrono::{DateTime, Datelike, NaiveDate, Utc};

use super::errors::ForecastError;

/// First day of `month` in `year`
pub fn first_day_of_month(year: i32, month: u32) -> Result<NaiveDate, ForecastError> {
    if !(1..=12).contains(&month) {
        return Err(ForecastError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(ForecastError::InvalidDate { year, month })
}

/// Last day of `month` in `year`, leap years included
pub fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate, ForecastError> {
    let first = first_day_of_month(year, month)?;
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        // December of the last representable year has no following month
        .or_else(|| NaiveDate::from_ymd_opt(first.year(), 12, 31))
        .ok_or(ForecastError::InvalidDate { year, month })
}

/// Midnight UTC of a calendar date, used as the chart's time coordinate
pub fn to_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
