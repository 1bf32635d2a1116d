//! Power-law model constants

use chrono::NaiveDate;

use crate::utils::ForecastError;

/// Scale factor `C` of the default model
pub const DEFAULT_SCALE: f64 = 1.60e-18;
/// Exponent `k` of the default model
pub const DEFAULT_EXPONENT: f64 = 6.04;

/// Day zero of the default model: the Bitcoin genesis block
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2009, 1, 3) {
    Some(date) => date,
    None => panic!("genesis block date is a valid calendar date"),
};

/// Immutable constants of `price = scale * days_since_epoch ^ exponent`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    scale: f64,
    exponent: f64,
    epoch: NaiveDate,
}

impl ModelConfig {
    /// Build a model, rejecting non-finite or non-positive constants
    pub fn new(scale: f64, exponent: f64, epoch: NaiveDate) -> Result<Self, ForecastError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ForecastError::Config(format!(
                "model scale must be a positive finite number, got {}",
                scale
            )));
        }
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(ForecastError::Config(format!(
                "model exponent must be a positive finite number, got {}",
                exponent
            )));
        }

        Ok(ModelConfig { scale, exponent, epoch })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            scale: DEFAULT_SCALE,
            exponent: DEFAULT_EXPONENT,
            epoch: DEFAULT_EPOCH,
        }
    }
}
