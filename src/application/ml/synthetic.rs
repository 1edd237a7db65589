//! Seeded synthetic household generator.
//!
//! Draws raw profiles column by column from fixed distributions, labels them with a
//! [`LabelRule`] and flips a fixed fraction of labels to keep the classes from being
//! perfectly separable. Same seed and sample count always yield the same dataset.

use crate::domain::errors::TrainingError;
use crate::domain::ml::household::{HouseholdProfile, LabelRule};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

pub const INCOME_MEAN: f64 = 100_000.0;
pub const INCOME_STD: f64 = 30_000.0;
pub const SAVINGS_MEAN: f64 = 500_000.0;
pub const SAVINGS_STD: f64 = 200_000.0;
pub const EXPENSES_MEAN: f64 = 40_000.0;
pub const EXPENSES_STD: f64 = 10_000.0;
pub const TARGET_PRICE_MEAN: f64 = 5_000_000.0;
pub const TARGET_PRICE_STD: f64 = 1_000_000.0;
pub const TIMELINE_CHOICES: &[u32] = &[5, 10, 15, 20];

#[derive(Debug, Clone, Copy)]
pub struct LabeledRecord {
    pub profile: HouseholdProfile,
    /// Label produced by the rule, before noise injection.
    pub clean_label: i32,
    pub label: i32,
}

impl LabeledRecord {
    pub fn is_flipped(&self) -> bool {
        self.clean_label != self.label
    }
}

#[derive(Debug, Clone)]
pub struct SyntheticDataset {
    pub records: Vec<LabeledRecord>,
}

impl SyntheticDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Raw feature rows in registry order.
    pub fn feature_rows(&self) -> Vec<Vec<f64>> {
        self.records
            .iter()
            .map(|r| r.profile.features().to_f64_vector())
            .collect()
    }

    pub fn labels(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.label).collect()
    }

    pub fn flipped_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_flipped()).count()
    }

    pub fn positive_rate(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let positives = self.records.iter().filter(|r| r.label == 1).count();
        positives as f64 / self.records.len() as f64
    }
}

pub struct SyntheticDataGenerator {
    rng: StdRng,
    rule: LabelRule,
    label_noise_fraction: f64,
}

impl SyntheticDataGenerator {
    pub fn new(seed: u64, rule: LabelRule, label_noise_fraction: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            rule,
            label_noise_fraction,
        }
    }

    pub fn generate(&mut self, n_samples: usize) -> Result<SyntheticDataset, TrainingError> {
        if !(0.0..=1.0).contains(&self.label_noise_fraction) {
            return Err(TrainingError::InvalidConfig {
                reason: format!(
                    "label noise fraction {} outside [0, 1]",
                    self.label_noise_fraction
                ),
            });
        }

        let incomes = self.normal_column(INCOME_MEAN, INCOME_STD, n_samples);
        let savings = self.normal_column(SAVINGS_MEAN, SAVINGS_STD, n_samples);
        let expenses = self.normal_column(EXPENSES_MEAN, EXPENSES_STD, n_samples);
        let timelines = self.timeline_column(n_samples);
        let target_prices = self.normal_column(TARGET_PRICE_MEAN, TARGET_PRICE_STD, n_samples);

        let mut records: Vec<LabeledRecord> = (0..n_samples)
            .map(|i| {
                let profile = HouseholdProfile {
                    income: incomes[i],
                    savings: savings[i],
                    expenses: expenses[i],
                    timeline: timelines[i],
                    target_price: target_prices[i],
                };
                let clean_label = self.rule.label(&profile);
                LabeledRecord {
                    profile,
                    clean_label,
                    label: clean_label,
                }
            })
            .collect();

        let n_flips = (n_samples as f64 * self.label_noise_fraction) as usize;
        for idx in rand::seq::index::sample(&mut self.rng, n_samples, n_flips) {
            let record = &mut records[idx];
            record.label = 1 - record.label;
        }

        debug!("Generated {} synthetic records ({} labels flipped)", n_samples, n_flips);

        Ok(SyntheticDataset { records })
    }

    fn normal_column(&mut self, mean: f64, std_dev: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|_| sample_normal(&mut self.rng, mean, std_dev))
            .collect()
    }

    fn timeline_column(&mut self, n: usize) -> Vec<u32> {
        (0..n)
            .map(|_| {
                *TIMELINE_CHOICES
                    .choose(&mut self.rng)
                    .unwrap_or(&TIMELINE_CHOICES[0])
            })
            .collect()
    }
}

/// Box-Muller transform over two uniform draws.
fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    // 1 - u keeps the log argument in (0, 1]
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + std_dev * z
}
