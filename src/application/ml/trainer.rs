use super::artifact::ModelArtifact;
use super::forest::{BaggedForest, ForestParameters};
use super::synthetic::{SyntheticDataGenerator, SyntheticDataset};
use crate::domain::errors::TrainingError;
use crate::domain::ml::household::LabelRule;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::info;

pub const N_SAMPLES: usize = 2000;
pub const SEED: u64 = 42;
pub const TEST_FRACTION: f64 = 0.2;
pub const LABEL_NOISE_FRACTION: f64 = 0.05;

/// Every knob of a training run. The trainer binary only ever uses `Default`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingConfig {
    pub n_samples: usize,
    pub seed: u64,
    pub test_fraction: f64,
    pub label_noise_fraction: f64,
    pub label_rule: LabelRule,
    pub forest: ForestParameters,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            n_samples: N_SAMPLES,
            seed: SEED,
            test_fraction: TEST_FRACTION,
            label_noise_fraction: LABEL_NOISE_FRACTION,
            label_rule: LabelRule::default(),
            forest: ForestParameters {
                seed: SEED,
                ..ForestParameters::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingReport {
    pub train_size: usize,
    pub test_size: usize,
    /// Holdout accuracy in [0, 1].
    pub accuracy: f64,
    pub positive_rate: f64,
    pub flipped_labels: usize,
}

pub struct ModelTrainer {
    config: TrainingConfig,
}

impl ModelTrainer {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Generates data, fits the forest on the training partition and scores the holdout.
    pub fn train(&self) -> Result<(ModelArtifact, TrainingReport), TrainingError> {
        let cfg = &self.config;

        let mut generator =
            SyntheticDataGenerator::new(cfg.seed, cfg.label_rule, cfg.label_noise_fraction);
        let dataset = generator.generate(cfg.n_samples)?;
        info!(
            "Generated {} synthetic households (positive rate {:.2})",
            dataset.len(),
            dataset.positive_rate()
        );

        let (train_idx, test_idx) = train_test_split(dataset.len(), cfg.test_fraction, cfg.seed)?;
        let (x_train, y_train) = select(&dataset, &train_idx);
        let (x_test, y_test) = select(&dataset, &test_idx);

        ensure_two_classes(&y_train)?;

        info!(
            "Training bagged forest on {} samples (Trees: {}, Depth: {:?}, MinSplit: {})...",
            x_train.len(),
            cfg.forest.n_trees,
            cfg.forest.max_depth,
            cfg.forest.min_samples_split
        );
        let forest = BaggedForest::fit(&x_train, &y_train, &cfg.forest)?;

        let accuracy = if x_test.is_empty() {
            0.0
        } else {
            let predictions = forest
                .predict(&x_test)
                .map_err(|reason| TrainingError::Evaluation { reason })?;
            accuracy_score(&y_test, &predictions)
        };

        let report = TrainingReport {
            train_size: x_train.len(),
            test_size: x_test.len(),
            accuracy,
            positive_rate: dataset.positive_rate(),
            flipped_labels: dataset.flipped_count(),
        };
        info!("Holdout accuracy: {:.4} (n={})", report.accuracy, report.test_size);

        Ok((ModelArtifact::new(forest), report))
    }
}

/// Shuffles `0..n` with `seed` and withholds `ceil(n * test_fraction)` indices.
pub fn train_test_split(
    n: usize,
    test_fraction: f64,
    seed: u64,
) -> Result<(Vec<usize>, Vec<usize>), TrainingError> {
    if !(0.0..1.0).contains(&test_fraction) {
        return Err(TrainingError::InvalidConfig {
            reason: format!("test fraction {} outside [0, 1)", test_fraction),
        });
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let test_size = ((n as f64) * test_fraction).ceil() as usize;
    let train = indices.split_off(test_size);
    Ok((train, indices))
}

pub fn accuracy_score(actual: &[i32], predicted: &[i32]) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }
    let correct = actual
        .iter()
        .zip(predicted.iter())
        .filter(|(a, p)| a == p)
        .count();
    correct as f64 / actual.len() as f64
}

fn select(dataset: &SyntheticDataset, indices: &[usize]) -> (Vec<Vec<f64>>, Vec<i32>) {
    indices
        .iter()
        .map(|&i| {
            let record = &dataset.records[i];
            (record.profile.features().to_f64_vector(), record.label)
        })
        .unzip()
}

fn ensure_two_classes(labels: &[i32]) -> Result<(), TrainingError> {
    match labels.first() {
        None => Err(TrainingError::InvalidConfig {
            reason: "training partition is empty".to_string(),
        }),
        Some(&first) if labels.iter().all(|&l| l == first) => {
            Err(TrainingError::DegenerateLabels { label: first })
        }
        Some(_) => Ok(()),
    }
}
