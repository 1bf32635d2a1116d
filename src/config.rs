use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::models::model_config::{DEFAULT_EPOCH, DEFAULT_EXPONENT, DEFAULT_SCALE};
use crate::models::ModelConfig;
use crate::utils::ForecastError;

pub const DEFAULT_CHART_OUTPUT: &str = "bitcoin_predictions.png";
pub const DEFAULT_PLOT_START_YEAR: i32 = 2014;
pub const DEFAULT_PLOT_YEARS_AHEAD: i32 = 25;

/// Settings derived from environment variables (a `.env` file is loaded first).
///
/// CLI flags take precedence over everything here.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub chart_output: PathBuf,
    /// First year shown when plotting
    pub plot_start_year: i32,
    /// Years added to the requested year to get the last plotted year
    pub plot_years_ahead: i32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ForecastError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from any variable source; unset or blank variables use defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ForecastError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let scale = parse_var(&var, "BTC_MODEL_SCALE", DEFAULT_SCALE)?;
        let exponent = parse_var(&var, "BTC_MODEL_EXPONENT", DEFAULT_EXPONENT)?;
        let epoch = match var("BTC_MODEL_EPOCH") {
            Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| {
                ForecastError::Config(format!("BTC_MODEL_EPOCH='{}' is not a YYYY-MM-DD date: {}", raw, e))
            })?,
            None => DEFAULT_EPOCH,
        };

        Ok(AppConfig {
            model: ModelConfig::new(scale, exponent, epoch)?,
            chart_output: var("BTC_CHART_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_OUTPUT)),
            plot_start_year: parse_var(&var, "BTC_PLOT_START_YEAR", DEFAULT_PLOT_START_YEAR)?,
            plot_years_ahead: parse_var(&var, "BTC_PLOT_YEARS_AHEAD", DEFAULT_PLOT_YEARS_AHEAD)?,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            model: ModelConfig::default(),
            chart_output: PathBuf::from(DEFAULT_CHART_OUTPUT),
            plot_start_year: DEFAULT_PLOT_START_YEAR,
            plot_years_ahead: DEFAULT_PLOT_YEARS_AHEAD,
        }
    }
}

fn parse_var<T, F>(var: &F, name: &str, default: T) -> Result<T, ForecastError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| ForecastError::Config(format!("{}='{}' is invalid: {}", name, raw, e))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.model, ModelConfig::default());
        assert_eq!(config.chart_output, PathBuf::from("bitcoin_predictions.png"));
        assert_eq!(config.plot_start_year, 2014);
        assert_eq!(config.plot_years_ahead, 25);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BTC_MODEL_SCALE", "2e-17"),
            ("BTC_MODEL_EXPONENT", " 5.8 "),
            ("BTC_MODEL_EPOCH", "2009-01-09"),
            ("BTC_CHART_OUTPUT", "/tmp/chart.png"),
            ("BTC_PLOT_START_YEAR", "2012"),
            ("BTC_PLOT_YEARS_AHEAD", "10"),
        ]))
        .unwrap();

        assert_eq!(config.model.scale(), 2e-17);
        assert_eq!(config.model.exponent(), 5.8);
        assert_eq!(config.model.epoch(), NaiveDate::from_ymd_opt(2009, 1, 9).unwrap());
        assert_eq!(config.chart_output, PathBuf::from("/tmp/chart.png"));
        assert_eq!(config.plot_start_year, 2012);
        assert_eq!(config.plot_years_ahead, 10);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[("BTC_MODEL_SCALE", "   ")])).unwrap();
        assert_eq!(config.model.scale(), DEFAULT_SCALE);
    }

    #[test]
    fn test_bad_values_are_errors() {
        let err = AppConfig::from_lookup(lookup(&[("BTC_MODEL_EXPONENT", "six")])).unwrap_err();
        assert!(matches!(err, ForecastError::Config(ref msg) if msg.contains("BTC_MODEL_EXPONENT")));

        let err = AppConfig::from_lookup(lookup(&[("BTC_MODEL_EPOCH", "03/01/2009")])).unwrap_err();
        assert!(matches!(err, ForecastError::Config(_)));

        let err = AppConfig::from_lookup(lookup(&[("BTC_MODEL_SCALE", "-1")])).unwrap_err();
        assert!(matches!(err, ForecastError::Config(_)));
    }
}
