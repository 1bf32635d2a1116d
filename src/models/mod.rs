//! Data models shared by the predictor, the history loader and the reporters

pub mod prediction;
pub mod history;
pub mod model_config;
pub mod chart;

// Re-export commonly used types for convenience
pub use prediction::{PredictionPoint, PredictionSeries};
pub use history::HistoricalRecord;
pub use model_config::ModelConfig;
pub use chart::ChartOptions;
