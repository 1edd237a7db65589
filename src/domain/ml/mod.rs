pub mod feature_registry;
pub mod household;
pub mod prediction;
