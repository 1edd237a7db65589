use super::artifact::ModelArtifact;
use super::predictor::SuccessPredictor;
use crate::domain::errors::{ModelError, PredictionError};
use crate::domain::ml::feature_registry::FeatureVector;
use std::path::{Path, PathBuf};

/// Predictor backed by a bagged smartcore forest loaded once from disk.
pub struct SmartCorePredictor {
    artifact: ModelArtifact,
    model_path: PathBuf,
}

impl SmartCorePredictor {
    /// Loads the artifact; a missing or unreadable file is a startup failure.
    pub fn load(model_path: &Path) -> Result<Self, ModelError> {
        let artifact = ModelArtifact::load(model_path)?;
        Ok(Self {
            artifact,
            model_path: model_path.to_path_buf(),
        })
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self {
            artifact,
            model_path: PathBuf::new(),
        }
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl SuccessPredictor for SmartCorePredictor {
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let probabilities = self
            .artifact
            .forest()
            .predict_proba(&[features.to_f64_vector()])
            .map_err(|reason| PredictionError::Inference { reason })?;

        match probabilities.first() {
            Some([_, success]) => Ok(*success),
            None => Err(PredictionError::Inference {
                reason: "No prediction returned".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "SmartCore Bagged Forest"
    }
}
