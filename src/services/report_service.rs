use clap::ValueEnum;

use crate::models::PredictionSeries;
use crate::utils::{ForecastError, Table};

pub const DATE_HEADER: &str = "Date";
pub const PRICE_HEADER: &str = "Predicted Price (USD)";

/// Textual rendering of a prediction series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned two-column table
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// JSON array of objects
    Json,
}

/// Render predictions in the requested format, ending with a newline
pub fn render(predictions: &PredictionSeries, format: OutputFormat) -> Result<String, ForecastError> {
    match format {
        OutputFormat::Table => Ok(render_table(predictions)),
        OutputFormat::Csv => render_csv(predictions),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(predictions)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_table(predictions: &PredictionSeries) -> String {
    let mut table = Table::new(vec![DATE_HEADER, PRICE_HEADER]).align_right(1);
    for point in predictions {
        table.add_row(vec![
            point.date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", point.predicted_price),
        ]);
    }
    table.render()
}

fn render_csv(predictions: &PredictionSeries) -> Result<String, ForecastError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([DATE_HEADER, PRICE_HEADER])?;
    for point in predictions {
        writer.write_record([
            point.date.format("%Y-%m-%d").to_string(),
            point.predicted_price.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ForecastError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
