//! Offline trainer: synthesizes households, fits the forest and writes the model file.
//!
//! Takes no arguments; every parameter is a compile-time constant. Any failure aborts
//! the run with a non-zero exit status.

use affordability_predictor::application::ml::{ModelTrainer, TrainingConfig};
use affordability_predictor::config::DEFAULT_MODEL_PATH;
use anyhow::{Context, Result};
use std::path::Path;

fn main() -> Result<()> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let config = TrainingConfig::default();
    println!(
        "Training on {} synthetic households (seed {}, Trees: {}, holdout {:.0}%)...",
        config.n_samples,
        config.seed,
        config.forest.n_trees,
        config.test_fraction * 100.0
    );

    let (artifact, report) = ModelTrainer::new(config)
        .train()
        .context("Training failed")?;

    println!(
        "Train/holdout: {}/{} | positive rate {:.2} | {} labels flipped",
        report.train_size, report.test_size, report.positive_rate, report.flipped_labels
    );
    println!("Model Training Complete. Accuracy: {:.2}", report.accuracy);

    let model_path = Path::new(DEFAULT_MODEL_PATH);
    artifact
        .save(model_path)
        .with_context(|| format!("Failed to save model to {:?}", model_path))?;
    println!("Model saved to {}", model_path.display());

    Ok(())
}
