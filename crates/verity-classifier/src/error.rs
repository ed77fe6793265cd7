//! Error types for the classifier adapter

use thiserror::Error;

/// Errors that can occur while loading or running a model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// The model artifact could not be loaded (I/O, parse or validation)
    #[error("Model unavailable at {path}: {reason}")]
    Unavailable {
        /// Artifact location
        path: String,
        /// What went wrong
        reason: String,
    },

    /// The artifact is malformed
    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    /// The artifact expects different feature columns than the extractor produces
    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(String),

    /// The model produced a probability vector that is not a distribution
    #[error("Invalid classifier output: {0}")]
    InvalidOutput(String),
}

impl ClassifierError {
    /// Whether the error means no model could be loaded
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ClassifierError::Unavailable { .. })
    }
}

impl From<serde_json::Error> for ClassifierError {
    fn from(e: serde_json::Error) -> Self {
        ClassifierError::InvalidArtifact(e.to_string())
    }
}
