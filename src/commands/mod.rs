pub mod predict;
pub mod plot;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::AppConfig;
use crate::models::HistoricalRecord;
use crate::services::history_service;
use crate::services::report_service::OutputFormat;
use crate::utils::ForecastError;

/// Generate Bitcoin price predictions from the power-law model.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Generate Bitcoin price predictions.")]
pub struct Cli {
    /// Path to the CSV file containing historical Bitcoin prices
    #[arg(short, long)]
    pub csv: Option<PathBuf>,

    /// Start year for which to predict prices
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: i32,

    /// Month for which to predict prices
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,

    /// Plot predictions along with historical data
    #[arg(long)]
    pub plot: bool,

    /// Where to write the chart image [default: bitcoin_predictions.png]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Format of the printed prediction table
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// First year shown on the chart [default: 2014]
    #[arg(long)]
    pub plot_start_year: Option<i32>,

    /// Years past --year shown on the chart [default: 25]
    #[arg(long)]
    pub plot_years_ahead: Option<i32>,

    /// Chart width in pixels
    #[arg(long, default_value_t = crate::models::chart::DEFAULT_CHART_WIDTH)]
    pub width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = crate::models::chart::DEFAULT_CHART_HEIGHT)]
    pub height: u32,
}

/// Load history (if requested) and dispatch to the plot or predict command
pub fn run(cli: &Cli, config: &AppConfig) -> Result<(), ForecastError> {
    let history: Option<Vec<HistoricalRecord>> = match &cli.csv {
        Some(path) => Some(history_service::load_history(path)?),
        None => None,
    };

    if cli.plot {
        info!("📈 Plot command called for {}-{:02}", cli.year, cli.month);
        plot::execute(cli, config, history.as_deref())
    } else {
        info!("💹 Predict command called for {}-{:02}", cli.year, cli.month);
        predict::execute(cli, config)
    }
}
