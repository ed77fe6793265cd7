//! Error types for the CLI application.

use thiserror::Error;
use verity_pipeline::{ErrorResponse, PipelineError};

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// No text argument and no `--stdin`
    #[error("No text provided")]
    NoText,

    /// Text given but empty or whitespace-only
    #[error("Empty text provided")]
    EmptyText,

    /// Argument parsing failed
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction or prediction failed
    #[error("Prediction failed: {0}")]
    Pipeline(#[from] PipelineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CliError {
    /// Error body printed on stdout
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            CliError::NoText => ErrorResponse::new("No text provided"),
            CliError::EmptyText | CliError::Pipeline(PipelineError::MissingInput) => {
                ErrorResponse::new("Empty text provided")
            }
            CliError::InvalidArguments(details) => {
                ErrorResponse::with_details("Invalid arguments", details.clone())
            }
            CliError::Config(_) | CliError::Toml(_) => {
                ErrorResponse::with_details("Invalid configuration", self.to_string())
            }
            CliError::Pipeline(e @ PipelineError::Config(_)) => {
                ErrorResponse::with_details("Invalid configuration", e.to_string())
            }
            CliError::Pipeline(e) => ErrorResponse::with_details("Prediction failed", e.to_string()),
            _ => ErrorResponse::with_details("Prediction failed", self.to_string()),
        }
    }
}
