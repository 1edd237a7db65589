// Synthetic data, training and inference
pub mod ml;
