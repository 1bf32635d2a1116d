//! Historical price models

use chrono::NaiveDate;

/// One observed closing price, as supplied by the historical CSV
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalRecord {
    pub date: NaiveDate,
    pub close: f64,
}
