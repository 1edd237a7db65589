use super::feature_registry::FeatureVector;
use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Prediction successful";

/// Body of `POST /predict`. Every field is required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub monthly_income: f64,
    pub current_savings: f64,
    pub monthly_expenses_total: f64,
    pub desired_timeline_years: f64,
    pub target_price: f64,
}

impl PredictionRequest {
    pub fn to_features(&self) -> FeatureVector {
        FeatureVector::new(
            self.monthly_income,
            self.current_savings,
            self.monthly_expenses_total,
            self.desired_timeline_years,
            self.target_price,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Percentage in [0, 100], two decimals.
    pub success_probability: f64,
    pub message: String,
}

impl PredictionResponse {
    pub fn from_probability(probability: f64) -> Self {
        Self {
            success_probability: to_percentage(probability),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Scales a probability to a percentage rounded to two decimals.
pub fn to_percentage(probability: f64) -> f64 {
    (probability * 100.0 * 100.0).round() / 100.0
}
