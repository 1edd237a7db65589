use crate::config::ErrorStatusPolicy;
use crate::domain::errors::PredictionError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// A prediction failure bound to the status code it will be reported with
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn from_prediction(err: PredictionError, policy: ErrorStatusPolicy) -> Self {
        let status = match policy {
            ErrorStatusPolicy::Distinct if err.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Convert ApiError to HTTP response
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(
            status_code = self.status.as_u16(),
            message = %self.message,
            "Prediction failed"
        );

        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid() -> PredictionError {
        PredictionError::InvalidRequest {
            reason: "missing field `targetPrice`".to_string(),
        }
    }

    fn internal() -> PredictionError {
        PredictionError::Inference {
            reason: "matrix".to_string(),
        }
    }

    #[test]
    fn test_uniform_policy_always_500() {
        let policy = ErrorStatusPolicy::Uniform;
        assert_eq!(
            ApiError::from_prediction(invalid(), policy).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from_prediction(internal(), policy).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_distinct_policy_separates_client_errors() {
        let policy = ErrorStatusPolicy::Distinct;
        assert_eq!(
            ApiError::from_prediction(invalid(), policy).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from_prediction(internal(), policy).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_keeps_reason() {
        let err = ApiError::from_prediction(invalid(), ErrorStatusPolicy::Uniform);
        assert!(err.message().contains("targetPrice"));
    }
}
