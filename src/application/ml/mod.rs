pub mod artifact;
pub mod forest;
pub mod prediction_service;
pub mod predictor;
pub mod smartcore_predictor;
pub mod synthetic;
pub mod trainer;

pub use artifact::ModelArtifact;
pub use prediction_service::PredictionService;
pub use predictor::SuccessPredictor;
pub use smartcore_predictor::SmartCorePredictor;
pub use trainer::{ModelTrainer, TrainingConfig, TrainingReport};
