pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use routes::*;

use crate::application::ml::PredictionService;
use crate::config::ErrorStatusPolicy;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: PredictionService,
    pub error_policy: ErrorStatusPolicy,
}

impl AppState {
    pub fn new(service: PredictionService) -> Self {
        Self {
            service,
            error_policy: ErrorStatusPolicy::default(),
        }
    }

    pub fn with_error_policy(mut self, error_policy: ErrorStatusPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }
}
