//! Configuration module for the predictor service.
//!
//! Service settings are loaded from environment variables (after `.env`, when present).
//! The trainer reads none of them; it always writes to [`DEFAULT_MODEL_PATH`].

mod server_config;

pub use server_config::{DEFAULT_BIND_ADDRESS, DEFAULT_PORT, ErrorStatusPolicy, ServerEnvConfig};

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Where the trainer writes the artifact and the service looks for it by default.
pub const DEFAULT_MODEL_PATH: &str = "data/ml/success_predictor_model.json";

/// Main service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub model_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerEnvConfig::default(),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let server = ServerEnvConfig::from_env().context("Failed to load server config")?;
        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));

        Ok(Self { server, model_path })
    }

    /// `address:port` string for the TCP listener.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.listen_address(), "127.0.0.1:5001");
        assert_eq!(
            config.model_path,
            PathBuf::from("data/ml/success_predictor_model.json")
        );
    }
}
