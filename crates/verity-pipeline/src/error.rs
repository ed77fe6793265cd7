//! Error types for the analysis pipeline

use thiserror::Error;
use verity_classifier::ClassifierError;

/// Errors that can occur while analyzing a text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// No text, or only whitespace
    #[error("Text missing")]
    MissingInput,

    /// Model could not be loaded, or rejected the features
    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    /// Model produced a label outside {0, 1} or an invalid probability vector
    #[error("Invalid classifier label: {0}")]
    InvalidLabel(String),

    /// Pipeline configuration is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PipelineError {
    /// Whether the model artifact could not be loaded
    pub fn is_unavailable(&self) -> bool {
        matches!(self, PipelineError::Classifier(e) if e.is_unavailable())
    }
}
