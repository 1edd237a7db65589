use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::FeatureVector;

/// Interface for success classifiers
pub trait SuccessPredictor: Send + Sync {
    /// Probability (0.0 to 1.0) that the household reaches its purchase goal
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;
}
