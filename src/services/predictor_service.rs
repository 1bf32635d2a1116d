use chrono::NaiveDate;
use tracing::debug;

use crate::models::{ModelConfig, PredictionPoint, PredictionSeries};
use crate::utils::dates::{first_day_of_month, last_day_of_month};
use crate::utils::ForecastError;

/// Longest span, in days, a single prediction may cover (about 273 years)
pub const MAX_PREDICTION_DAYS: i64 = 100_000;

/// Price predicted by `model` for a single calendar date.
///
/// Positive day counts are evaluated in log space, `exp(ln C + k ln n)`, so the
/// intermediate `n^k` is never materialised. The relative error stays within a
/// few ulps of `|ln C + k ln n|`, well under 1e-12 for any date chrono can
/// represent. Day zero prices at exactly 0.
pub fn price_at(model: &ModelConfig, date: NaiveDate) -> Result<f64, ForecastError> {
    let days = (date - model.epoch()).num_days();

    if days < 0 {
        return Err(ForecastError::Domain { date, days });
    }
    if days == 0 {
        return Ok(0.0);
    }

    let price = (model.scale().ln() + model.exponent() * (days as f64).ln()).exp();
    if !price.is_finite() {
        return Err(ForecastError::Overflow { date });
    }

    Ok(price)
}

/// Predict one price per calendar day in `[start, end]`, both ends inclusive.
///
/// Spans longer than [`MAX_PREDICTION_DAYS`] are rejected before anything is allocated.
pub fn predict(
    model: &ModelConfig,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<PredictionSeries, ForecastError> {
    if start > end {
        return Err(ForecastError::InvalidRange { start, end });
    }

    let days = (end - start).num_days() + 1;
    if days > MAX_PREDICTION_DAYS {
        return Err(ForecastError::RangeTooLong {
            start,
            end,
            days,
            max: MAX_PREDICTION_DAYS,
        });
    }
    let mut points = Vec::with_capacity(days as usize);

    for date in start.iter_days().take_while(|d| *d <= end) {
        points.push(PredictionPoint {
            date,
            predicted_price: price_at(model, date)?,
        });
    }

    debug!(
        "Predicted {} days from {} to {} (C={}, k={}, epoch={})",
        points.len(),
        start,
        end,
        model.scale(),
        model.exponent(),
        model.epoch()
    );

    Ok(PredictionSeries::from_points(points))
}

/// Predict from the first day of `month` in `start_year` through the last day
/// of `month` in `end_year`
pub fn predict_month_span(
    model: &ModelConfig,
    start_year: i32,
    end_year: i32,
    month: u32,
) -> Result<PredictionSeries, ForecastError> {
    let start = first_day_of_month(start_year, month)?;
    let end = last_day_of_month(end_year, month)?;

    predict(model, start, end)
}
