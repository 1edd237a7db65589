//! Persisted model artifact: the fitted forest plus the feature order it expects.
//!
//! Serialized with serde_json. Saving overwrites whatever is at the path; loading rejects
//! files whose feature list differs from the registry.

use super::forest::BaggedForest;
use crate::domain::errors::ModelError;
use crate::domain::ml::feature_registry::{self, FEATURE_NAMES};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

#[derive(Serialize, Deserialize)]
pub struct ModelArtifact {
    feature_names: Vec<String>,
    forest: BaggedForest,
}

impl ModelArtifact {
    pub fn new(forest: BaggedForest) -> Self {
        Self {
            feature_names: feature_registry::feature_names(),
            forest,
        }
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn forest(&self) -> &BaggedForest {
        &self.forest
    }

    pub fn save(&self, path: &Path) -> Result<(), ModelError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ModelError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = File::create(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush().map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Model saved to {:?}", path);
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))?;
        artifact.validate()?;

        info!(
            "Loaded model from {:?} ({} trees)",
            path,
            artifact.forest.n_trees()
        );
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if !feature_registry::matches_registry(&self.feature_names) {
            return Err(ModelError::FeatureMismatch {
                expected: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
                found: self.feature_names.clone(),
            });
        }
        if self.forest.n_trees() == 0 {
            return Err(ModelError::EmptyEnsemble);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::forest::ForestParameters;

    fn tiny_artifact() -> ModelArtifact {
        let rows = vec![
            vec![1.0, 0.0, 0.0, 5.0, 10.0],
            vec![2.0, 0.0, 0.0, 5.0, 10.0],
            vec![8.0, 0.0, 0.0, 5.0, 10.0],
            vec![9.0, 0.0, 0.0, 5.0, 10.0],
        ];
        let labels = vec![0, 0, 1, 1];
        let params = ForestParameters {
            n_trees: 3,
            ..ForestParameters::default()
        };
        ModelArtifact::new(BaggedForest::fit(&rows, &labels, &params).unwrap())
    }

    #[test]
    fn test_save_then_load_preserves_predictions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("model.json");
        let artifact = tiny_artifact();

        artifact.save(&path).unwrap();
        let loaded = ModelArtifact::load(&path).unwrap();

        let probe = vec![
            vec![1.5, 0.0, 0.0, 5.0, 10.0],
            vec![8.5, 0.0, 0.0, 5.0, 10.0],
        ];
        assert_eq!(
            artifact.forest().predict_proba(&probe).unwrap(),
            loaded.forest().predict_proba(&probe).unwrap()
        );
        assert_eq!(
            loaded.feature_names(),
            feature_registry::feature_names().as_slice()
        );
    }

    #[test]
    fn test_reload_is_bit_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        // Irrational inputs give split thresholds with full-precision decimal expansions.
        let rows = vec![
            vec![0.1, 0.7, 1.0 / 3.0, 5.0, 2.0_f64.sqrt()],
            vec![0.2, 0.3, 2.0 / 3.0, 10.0, 3.0_f64.sqrt()],
            vec![0.9, 0.1, 1.0 / 7.0, 15.0, 5.0_f64.sqrt()],
            vec![0.8, 0.6, 6.0 / 7.0, 20.0, 7.0_f64.sqrt()],
        ];
        let params = ForestParameters {
            n_trees: 3,
            ..ForestParameters::default()
        };
        let forest = BaggedForest::fit(&rows, &[0, 0, 1, 1], &params).unwrap();
        let artifact = ModelArtifact::new(forest);

        artifact.save(&path).unwrap();
        let loaded = ModelArtifact::load(&path).unwrap();

        // Split thresholds survive unchanged, so re-encoding yields the same document.
        assert_eq!(
            serde_json::to_string(&artifact).unwrap(),
            serde_json::to_string(&loaded).unwrap()
        );
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, b"stale").unwrap();

        tiny_artifact().save(&path).unwrap();
        assert!(ModelArtifact::load(&path).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ModelArtifact::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ModelError::NotFound { .. })));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, b"{not json").unwrap();

        assert!(matches!(
            ModelArtifact::load(&path),
            Err(ModelError::Serialization(_))
        ));
    }

    #[test]
    fn test_feature_mismatch_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let mut json = serde_json::to_value(tiny_artifact()).unwrap();
        json["feature_names"][3] = serde_json::Value::String("loan_term".to_string());
        std::fs::write(&path, serde_json::to_vec(&json).unwrap()).unwrap();

        assert!(matches!(
            ModelArtifact::load(&path),
            Err(ModelError::FeatureMismatch { .. })
        ));
    }
}
