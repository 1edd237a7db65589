use crate::infrastructure::api::{AppState, handlers};
use axum::{Router, routing::post};

/// Build the predictor router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(handlers::predict))
        .with_state(state)
}
