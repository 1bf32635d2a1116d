use tracing::debug;

use crate::commands::Cli;
use crate::config::AppConfig;
use crate::services::{predictor_service, report_service};
use crate::utils::ForecastError;

/// Print one prediction per day of the requested month
pub fn execute(cli: &Cli, config: &AppConfig) -> Result<(), ForecastError> {
    let output = build_report(cli, config)?;
    print!("{}", output);
    Ok(())
}

fn build_report(cli: &Cli, config: &AppConfig) -> Result<String, ForecastError> {
    let predictions = predictor_service::predict_month_span(&config.model, cli.year, cli.year, cli.month)?;
    debug!("Rendering {} predictions as {:?}", predictions.len(), cli.format);

    report_service::render(&predictions, cli.format)
}
