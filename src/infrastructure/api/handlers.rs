use super::{ApiError, AppState};
use crate::domain::ml::prediction::PredictionResponse;
use axum::{Json, body::Bytes, extract::State};

/// Score one household.
///
/// The raw body is parsed here rather than through the `Json` extractor so that
/// malformed input surfaces as a `{"error": ...}` body like every other failure.
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictionResponse>, ApiError> {
    state
        .service
        .predict_json(&body)
        .map(Json)
        .map_err(|err| ApiError::from_prediction(err, state.error_policy))
}
