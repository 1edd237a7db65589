use super::predictor::SuccessPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::ml::prediction::{PredictionRequest, PredictionResponse};
use std::sync::Arc;

/// Immutable request-to-score service shared by every HTTP worker.
#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<dyn SuccessPredictor>,
}

impl PredictionService {
    pub fn new(predictor: Arc<dyn SuccessPredictor>) -> Self {
        Self { predictor }
    }

    pub fn predictor_name(&self) -> &str {
        self.predictor.name()
    }

    pub fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictionError> {
        let probability = self.predictor.predict_proba(&request.to_features())?;
        Ok(PredictionResponse::from_probability(probability))
    }

    /// Parses a raw JSON body and scores it. The body must be an object with named keys;
    /// arrays and scalars are rejected even when their values line up positionally.
    pub fn predict_json(&self, body: &[u8]) -> Result<PredictionResponse, PredictionError> {
        if body.is_empty() {
            return Err(PredictionError::InvalidRequest {
                reason: "request body is empty".to_string(),
            });
        }
        let value: serde_json::Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(PredictionError::InvalidRequest {
                reason: "request body must be a JSON object".to_string(),
            });
        }
        let request: PredictionRequest = serde_json::from_value(value)?;
        self.predict(&request)
    }
}
