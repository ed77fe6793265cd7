//! Config command implementation.

use crate::config::Config;
use crate::error::{CliError, Result};
use std::path::Path;

/// Write the default configuration to `path`.
///
/// An existing file is only replaced with `force`.
pub fn execute_config_init(path: &Path, force: bool) -> Result<String> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists; use --force to overwrite",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    Ok(format!("Wrote default configuration to {}", path.display()))
}

/// Render the effective configuration as TOML.
pub fn execute_config_show(config: &Config) -> Result<String> {
    toml::to_string_pretty(config)
        .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
}
