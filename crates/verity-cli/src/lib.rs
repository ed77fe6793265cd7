//! Verity CLI library.
//!
//! Command-line access to the credibility pipeline: one-shot analysis that
//! prints a JSON report, feature inspection, the feature schema, and an
//! interactive REPL.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
