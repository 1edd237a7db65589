//! Predictor Server - single-endpoint success probability service
//!
//! Loads the trained model once at startup and answers `POST /predict` until the
//! process is stopped. A missing or unreadable model aborts startup.
//!
//! # Usage
//! ```sh
//! cargo run --bin train_model
//! cargo run --bin server
//! ```
//!
//! # Environment Variables
//! - `PREDICTOR_BIND_ADDRESS` - Listen address (default: 127.0.0.1)
//! - `PREDICTOR_PORT` - Listen port (default: 5001)
//! - `MODEL_PATH` - Model artifact (default: data/ml/success_predictor_model.json)
//! - `PREDICTOR_DISTINCT_CLIENT_ERRORS` - Report malformed requests as 400 (default: false)

use affordability_predictor::application::ml::{PredictionService, SmartCorePredictor};
use affordability_predictor::config::Config;
use affordability_predictor::infrastructure::{AppState, build_router};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Predictor Server {} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: Model={:?}, Listen={}, ErrorPolicy={:?}",
        config.model_path,
        config.listen_address(),
        config.server.error_policy
    );

    let predictor = SmartCorePredictor::load(&config.model_path)
        .with_context(|| format!("Failed to load model from {:?}", config.model_path))?;
    let service = PredictionService::new(Arc::new(predictor));
    info!("Predictor ready: {}", service.predictor_name());

    let state = AppState::new(service).with_error_policy(config.server.error_policy);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_address()))?;
    info!("Listening on http://{}", config.listen_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received. Exiting...");
    }
}
