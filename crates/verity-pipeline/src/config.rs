//! Configuration for the analysis pipeline

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use verity_domain::LabelConvention;

/// Configuration for the Pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Path to the JSON model artifact
    pub model_path: PathBuf,

    /// Load the model at startup instead of on the first request
    pub eager_load: bool,

    /// Which raw class the model uses for real news:
    /// "real-is-one" or "real-is-zero"
    pub label_convention: String,
}

impl PipelineConfig {
    /// Configuration for a model at `path`, otherwise default
    pub fn with_model_path(path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: path.into(),
            ..Self::default()
        }
    }

    /// Parsed label convention
    pub fn convention(&self) -> Result<LabelConvention, String> {
        self.label_convention.parse()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model_path.as_os_str().is_empty() {
            return Err("model_path must not be empty".to_string());
        }
        self.convention()?;
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.json"),
            eager_load: false,
            label_convention: LabelConvention::default().as_str().to_string(),
        }
    }
}
