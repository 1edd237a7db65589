//! Predictor service configuration parsing from environment variables.
//!
//! This module handles the listen address and HTTP error reporting policy.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5001;

/// How request failures map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorStatusPolicy {
    /// Every failure is reported as 500
    #[default]
    Uniform,
    /// Malformed input is 400, internal failures 500
    Distinct,
}

/// Server environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerEnvConfig {
    pub bind_address: String,
    pub port: u16,
    pub error_policy: ErrorStatusPolicy,
}

impl Default for ServerEnvConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            error_policy: ErrorStatusPolicy::Uniform,
        }
    }
}

impl ServerEnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for unset keys.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PREDICTOR_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PREDICTOR_PORT: {}", raw))?,
            None => DEFAULT_PORT,
        };

        let distinct = lookup("PREDICTOR_DISTINCT_CLIENT_ERRORS")
            .unwrap_or_else(|| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        Ok(Self {
            bind_address: lookup("PREDICTOR_BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port,
            error_policy: if distinct {
                ErrorStatusPolicy::Distinct
            } else {
                ErrorStatusPolicy::Uniform
            },
        })
    }
}
