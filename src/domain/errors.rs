use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while answering a single prediction request
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Inference failed: {reason}")]
    Inference { reason: String },
}

impl PredictionError {
    /// True for failures caused by the caller's input rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, PredictionError::InvalidRequest { .. })
    }
}

impl From<serde_json::Error> for PredictionError {
    fn from(err: serde_json::Error) -> Self {
        PredictionError::InvalidRequest {
            reason: err.to_string(),
        }
    }
}

/// Errors related to persisting and loading the model artifact
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("Model I/O failed for {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Model serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Feature mismatch: expected {expected:?}, found {found:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Model contains no trees")]
    EmptyEnsemble,
}

/// Errors related to synthetic data generation and model fitting
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("Invalid training configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Degenerate label set: every training record has label {label}")]
    DegenerateLabels { label: i32 },

    #[error("Matrix creation failed: {reason}")]
    Matrix { reason: String },

    #[error("Tree {tree} failed to fit: {reason}")]
    Fit { tree: usize, reason: String },

    #[error("Evaluation failed: {reason}")]
    Evaluation { reason: String },
}
