use chrono::{DateTime, Utc};
use plotters::prelude::*;
use tracing::info;

use crate::models::{ChartOptions, HistoricalRecord, PredictionSeries};
use crate::utils::dates::to_utc;
use crate::utils::ForecastError;

/// Chart data point with timestamp and price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Axis ranges covering every plotted point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub x_min: DateTime<Utc>,
    pub x_max: DateTime<Utc>,
    pub y_min: f64,
    pub y_max: f64,
}

/// Convert predictions to plottable points, dropping the zero priced at the epoch
pub fn prediction_points(predictions: &PredictionSeries) -> Vec<PricePoint> {
    predictions
        .points()
        .iter()
        .filter(|p| p.predicted_price > 0.0)
        .map(|p| PricePoint {
            timestamp: to_utc(p.date),
            price: p.predicted_price,
        })
        .collect()
}

/// Convert historical closes to plottable points; a log axis needs finite positive prices
pub fn history_points(history: &[HistoricalRecord]) -> Vec<PricePoint> {
    history
        .iter()
        .filter(|r| r.close.is_finite() && r.close > 0.0)
        .map(|r| PricePoint {
            timestamp: to_utc(r.date),
            price: r.close,
        })
        .collect()
}

/// Compute axis ranges across all series, padded on the log-scaled price axis
pub fn chart_bounds(series: &[&[PricePoint]]) -> Option<ChartBounds> {
    let mut points = series.iter().flat_map(|s| s.iter());
    let first = points.next()?;

    let mut bounds = ChartBounds {
        x_min: first.timestamp,
        x_max: first.timestamp,
        y_min: first.price,
        y_max: first.price,
    };
    for p in points {
        bounds.x_min = bounds.x_min.min(p.timestamp);
        bounds.x_max = bounds.x_max.max(p.timestamp);
        bounds.y_min = bounds.y_min.min(p.price);
        bounds.y_max = bounds.y_max.max(p.price);
    }

    // Pad by a factor rather than an offset since the price axis is logarithmic
    bounds.y_min /= 1.5;
    bounds.y_max *= 1.5;
    if bounds.x_min == bounds.x_max {
        bounds.x_max = bounds.x_max + chrono::Duration::days(1);
    }

    Some(bounds)
}

/// Render predictions, and historical prices if given, to a PNG file
pub fn render_chart(
    predictions: &PredictionSeries,
    history: Option<&[HistoricalRecord]>,
    options: &ChartOptions,
) -> Result<(), ForecastError> {
    let predicted = prediction_points(predictions);
    let historical = history.map(history_points).unwrap_or_default();

    if predicted.len() < 2 {
        return Err(ForecastError::Chart(
            "not enough positive predictions to draw a chart (minimum 2 points required)".to_string(),
        ));
    }

    let bounds = chart_bounds(&[historical.as_slice(), predicted.as_slice()])
        .ok_or_else(|| ForecastError::Chart("nothing to plot".to_string()))?;

    {
        let backend = BitMapBackend::new(&options.output, (options.width, options.height));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ForecastError::Chart(format!("failed to fill canvas: {}", e)))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&options.title, ("sans-serif", 30.0).into_font())
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(80)
            .build_cartesian_2d(bounds.x_min..bounds.x_max, (bounds.y_min..bounds.y_max).log_scale())
            .map_err(|e| ForecastError::Chart(format!("failed to build chart: {}", e)))?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc("Price (USD)")
            .x_label_formatter(&|t| t.format("%Y").to_string())
            .y_label_formatter(&|p| format!("{:.0}", p))
            .draw()
            .map_err(|e| ForecastError::Chart(format!("failed to draw mesh: {}", e)))?;

        if !historical.is_empty() {
            chart
                .draw_series(LineSeries::new(
                    historical.iter().map(|p| (p.timestamp, p.price)),
                    &BLUE,
                ))
                .map_err(|e| ForecastError::Chart(format!("failed to draw history: {}", e)))?
                .label("Historical Prices")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
        }

        chart
            .draw_series(LineSeries::new(
                predicted.iter().map(|p| (p.timestamp, p.price)),
                &RED,
            ))
            .map_err(|e| ForecastError::Chart(format!("failed to draw predictions: {}", e)))?
            .label("Predicted Prices")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| ForecastError::Chart(format!("failed to draw legend: {}", e)))?;

        root.present()
            .map_err(|e| ForecastError::Chart(format!("failed to render chart: {}", e)))?;
    }

    info!(
        "📈 Chart with {} predicted and {} historical points written to {}",
        predicted.len(),
        historical.len(),
        options.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelConfig;
    use crate::services::predictor_service;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch_zero_is_not_plotted() {
        let model = ModelConfig::default();
        let series = predictor_service::predict(&model, ymd(2009, 1, 3), ymd(2009, 1, 5)).unwrap();

        let points = prediction_points(&series);
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.price > 0.0));
    }

    #[test]
    fn test_bounds_cover_all_series() {
        let history = history_points(&[
            HistoricalRecord { date: ymd(2014, 1, 1), close: 800.0 },
            HistoricalRecord { date: ymd(2015, 1, 1), close: 0.0 },
            HistoricalRecord { date: ymd(2016, 1, 1), close: 430.0 },
        ]);
        assert_eq!(history.len(), 2);

        let model = ModelConfig::default();
        let series = predictor_service::predict(&model, ymd(2015, 6, 1), ymd(2030, 6, 1)).unwrap();
        let predicted = prediction_points(&series);

        let bounds = chart_bounds(&[history.as_slice(), predicted.as_slice()]).unwrap();
        assert_eq!(bounds.x_min, to_utc(ymd(2014, 1, 1)));
        assert_eq!(bounds.x_max, to_utc(ymd(2030, 6, 1)));

        let lowest = predicted.iter().chain(history.iter()).map(|p| p.price).fold(f64::INFINITY, f64::min);
        let highest = predicted.iter().chain(history.iter()).map(|p| p.price).fold(0.0, f64::max);
        assert!(bounds.y_min < lowest);
        assert!(bounds.y_max > highest);
    }

    #[test]
    fn test_non_finite_closes_keep_bounds_finite() {
        let history = history_points(&[
            HistoricalRecord { date: ymd(2019, 1, 1), close: f64::INFINITY },
            HistoricalRecord { date: ymd(2019, 6, 1), close: f64::NAN },
            HistoricalRecord { date: ymd(2020, 1, 1), close: 7000.0 },
        ]);
        assert_eq!(history.len(), 1);

        let bounds = chart_bounds(&[history.as_slice()]).unwrap();
        assert!(bounds.y_min.is_finite());
        assert!(bounds.y_max.is_finite());
    }

    #[test]
    fn test_bounds_of_nothing() {
        assert!(chart_bounds(&[]).is_none());
    }

    #[test]
    fn test_render_needs_two_points() {
        let model = ModelConfig::default();
        let series = predictor_service::predict(&model, ymd(2020, 1, 1), ymd(2020, 1, 1)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let options = ChartOptions::new(dir.path().join("chart.png"));

        let err = render_chart(&series, None, &options).unwrap_err();
        assert!(matches!(err, ForecastError::Chart(_)));
        assert!(!options.output.exists());
    }
}
