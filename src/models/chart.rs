//! Chart generation models

use std::path::PathBuf;

pub const DEFAULT_CHART_WIDTH: u32 = 1000;
pub const DEFAULT_CHART_HEIGHT: u32 = 600;

/// Where and how large the prediction chart is drawn
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl ChartOptions {
    pub fn new(output: PathBuf) -> Self {
        ChartOptions {
            output,
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            title: "Bitcoin Price Predictions".to_string(),
        }
    }
}
