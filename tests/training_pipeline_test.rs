use affordability_predictor::application::ml::forest::ForestParameters;
use affordability_predictor::application::ml::synthetic::SyntheticDataGenerator;
use affordability_predictor::application::ml::{
    ModelArtifact, ModelTrainer, SmartCorePredictor, SuccessPredictor, TrainingConfig,
};
use affordability_predictor::domain::errors::ModelError;
use affordability_predictor::domain::ml::feature_registry::FeatureVector;
use affordability_predictor::domain::ml::household::LabelRule;

fn small_config(seed: u64) -> TrainingConfig {
    TrainingConfig {
        n_samples: 600,
        seed,
        forest: ForestParameters {
            n_trees: 20,
            max_depth: Some(10),
            min_samples_split: 2,
            seed,
        },
        ..TrainingConfig::default()
    }
}

fn probes() -> Vec<FeatureVector> {
    vec![
        FeatureVector::new(120_000.0, 600_000.0, 50_000.0, 5.0, 6_000_000.0),
        FeatureVector::new(60_000.0, 100_000.0, 45_000.0, 20.0, 7_000_000.0),
        FeatureVector::new(150_000.0, 900_000.0, 30_000.0, 10.0, 4_000_000.0),
    ]
}

#[test]
fn test_training_is_reproducible() {
    let (first, report_a) = ModelTrainer::new(small_config(42)).train().unwrap();
    let (second, report_b) = ModelTrainer::new(small_config(42)).train().unwrap();

    assert_eq!(report_a, report_b);

    let a = SmartCorePredictor::from_artifact(first);
    let b = SmartCorePredictor::from_artifact(second);
    for probe in probes() {
        assert_eq!(
            a.predict_proba(&probe).unwrap(),
            b.predict_proba(&probe).unwrap()
        );
    }
}

#[test]
fn test_holdout_accuracy_beats_chance() {
    let (_, report) = ModelTrainer::new(small_config(42)).train().unwrap();

    assert_eq!(report.train_size + report.test_size, 600);
    assert_eq!(report.test_size, 120);
    assert!(report.accuracy > 0.6, "accuracy {}", report.accuracy);
}

#[test]
fn test_saved_model_serves_same_predictions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("ml").join("model.json");

    let (artifact, _) = ModelTrainer::new(small_config(7)).train().unwrap();
    let expected: Vec<f64> = {
        let in_memory = SmartCorePredictor::from_artifact(artifact);
        probes()
            .iter()
            .map(|p| in_memory.predict_proba(p).unwrap())
            .collect()
    };

    let (artifact, _) = ModelTrainer::new(small_config(7)).train().unwrap();
    artifact.save(&path).unwrap();

    let loaded = SmartCorePredictor::load(&path).unwrap();
    assert_eq!(loaded.model_path(), path.as_path());
    let actual: Vec<f64> = probes()
        .iter()
        .map(|p| loaded.predict_proba(p).unwrap())
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_retraining_overwrites_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");

    let (first, _) = ModelTrainer::new(small_config(1)).train().unwrap();
    first.save(&path).unwrap();
    let (second, _) = ModelTrainer::new(small_config(2)).train().unwrap();
    second.save(&path).unwrap();

    let reloaded = ModelArtifact::load(&path).unwrap();
    let expected = SmartCorePredictor::from_artifact(second);
    let actual = SmartCorePredictor::from_artifact(reloaded);
    for probe in probes() {
        assert_eq!(
            actual.predict_proba(&probe).unwrap(),
            expected.predict_proba(&probe).unwrap()
        );
    }
}

#[test]
fn test_missing_model_prevents_startup() {
    let dir = tempfile::tempdir().unwrap();
    let result = SmartCorePredictor::load(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(ModelError::NotFound { .. })));
}

#[test]
fn test_noise_free_labels_match_rule() {
    let rule = LabelRule::default();
    let dataset = SyntheticDataGenerator::new(42, rule, 0.0)
        .generate(1000)
        .unwrap();

    assert_eq!(dataset.flipped_count(), 0);
    for record in &dataset.records {
        let ratios = record.profile.ratios();
        let expected = ratios.savings_rate > 0.4
            && ratios.affordability_ratio > 0.3
            && ratios.momentum_ratio < 36.0;
        assert_eq!(record.label, i32::from(expected));
    }
}
