//! Prediction models

use chrono::NaiveDate;
use serde::Serialize;

/// A single day's power-law price estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionPoint {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Predicted Price (USD)")]
    pub predicted_price: f64,
}

/// Daily predictions over a closed date interval, ascending by date with no gaps
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictionSeries {
    points: Vec<PredictionPoint>,
}

impl PredictionSeries {
    pub(crate) fn from_points(points: Vec<PredictionPoint>) -> Self {
        PredictionSeries { points }
    }

    pub fn points(&self) -> &[PredictionPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first(&self) -> Option<&PredictionPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PredictionPoint> {
        self.points.last()
    }
}

impl<'a> IntoIterator for &'a PredictionSeries {
    type Item = &'a PredictionPoint;
    type IntoIter = std::slice::Iter<'a, PredictionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
