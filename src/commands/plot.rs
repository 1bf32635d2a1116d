use tracing::{debug, info};

use crate::commands::Cli;
use crate::config::AppConfig;
use crate::models::{ChartOptions, HistoricalRecord};
use crate::services::{chart_service, predictor_service};
use crate::utils::ForecastError;

/// Years spanned by the chart: a pinned start year through `year + years_ahead`
pub fn plot_years(start_year: i32, year: i32, years_ahead: i32) -> Result<(i32, i32), ForecastError> {
    let end_year = year.checked_add(years_ahead).ok_or_else(|| {
        ForecastError::Config(format!("{} + {} years overflows the calendar", year, years_ahead))
    })?;
    Ok((start_year, end_year))
}

/// Predict over the widened range and draw it next to any historical prices
pub fn execute(
    cli: &Cli,
    config: &AppConfig,
    history: Option<&[HistoricalRecord]>,
) -> Result<(), ForecastError> {
    let (start_year, end_year) = plot_years(
        cli.plot_start_year.unwrap_or(config.plot_start_year),
        cli.year,
        cli.plot_years_ahead.unwrap_or(config.plot_years_ahead),
    )?;
    info!("Plotting predictions from {} to {}", start_year, end_year);

    let predictions = predictor_service::predict_month_span(&config.model, start_year, end_year, cli.month)?;
    if let (Some(first), Some(last)) = (predictions.first(), predictions.last()) {
        debug!(
            "Predicted {:.2} USD on {} rising to {:.2} USD on {}",
            first.predicted_price, first.date, last.predicted_price, last.date
        );
    }

    let mut options = ChartOptions::new(cli.output.clone().unwrap_or_else(|| config.chart_output.clone()));
    options.width = cli.width;
    options.height = cli.height;

    chart_service::render_chart(&predictions, history, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_widening() {
        assert_eq!(plot_years(2014, 2024, 25).unwrap(), (2014, 2049));
    }

    #[test]
    fn test_widening_overflow() {
        assert!(matches!(plot_years(2014, i32::MAX, 25), Err(ForecastError::Config(_))));
    }

    #[test]
    fn test_far_future_year_is_rejected() {
        let cli = Cli::try_parse_from(["btc-power-law", "-y", "200000", "-m", "6", "--plot"]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.chart_output = dir.path().join("chart.png");

        let err = execute(&cli, &config, None).unwrap_err();
        assert!(matches!(err, ForecastError::RangeTooLong { .. }));
        assert!(!config.chart_output.exists());
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let cli = Cli::try_parse_from([
            "btc-power-law",
            "-y",
            "2000",
            "-m",
            "1",
            "--plot",
            "--plot-years-ahead",
            "0",
        ])
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.chart_output = dir.path().join("chart.png");

        let err = execute(&cli, &config, None).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidRange { .. }));
    }
}
