//! Verity Router
//!
//! HTTP front end for the credibility pipeline. Accepts article text as
//! JSON and returns the credibility report, with a health endpoint that
//! reports whether the model is resident.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::RouterConfig;
use handlers::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;
use verity_pipeline::{DefaultPipeline, PipelineError};

/// Router error
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Pipeline could not be built
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application state for a configuration
///
/// With `eager_load` set the model is read here; a failure is logged and the
/// service starts degraded.
pub fn build_state(config: &RouterConfig) -> Result<AppState, RouterError> {
    let pipeline = DefaultPipeline::from_config(&config.pipeline)?;
    Ok(AppState::new(pipeline))
}

/// Start the Router HTTP server
///
/// Builds the pipeline and serves until the process is stopped.
pub async fn start_server(config: RouterConfig) -> Result<(), RouterError> {
    info!("Starting Verity Router");
    info!("Bind address: {}", config.bind_addr());
    info!("Model path: {}", config.pipeline.model_path.display());
    info!("Label convention: {}", config.pipeline.label_convention);

    let state = build_state(&config)?;
    let app = create_router(state, config.cors);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Router listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| RouterError::Server(e.to_string()))?;

    Ok(())
}
