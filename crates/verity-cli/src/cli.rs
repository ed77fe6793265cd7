//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use verity_domain::LabelConvention;

/// Verity - Score the credibility of a news text.
#[derive(Debug, Parser)]
#[command(name = "verity")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Model artifact path
    #[arg(short, long, global = true, env = "VERITY_MODEL")]
    pub model: Option<String>,

    /// Which raw class means "real"
    #[arg(long, value_enum, global = true)]
    pub label_convention: Option<ConventionArg>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// JSON format (default)
    Json,
    /// Table format
    Table,
}

/// Label convention options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConventionArg {
    /// Raw class 1 is real news
    RealIsOne,
    /// Raw class 0 is real news
    RealIsZero,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a text and print its credibility report
    Analyze(InputArgs),

    /// Print the extracted features without classifying
    Features(InputArgs),

    /// Print the feature schema
    Schema,

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Text input shared by `analyze` and `features`.
#[derive(Debug, Clone, Parser)]
pub struct InputArgs {
    /// Article body
    pub text: Option<String>,

    /// Headline; derived from the body when omitted
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Read the body from standard input
    #[arg(long, conflicts_with = "text")]
    pub stdin: bool,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    /// What to do with the configuration
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Table => crate::config::OutputFormat::Table,
        }
    }
}

impl From<ConventionArg> for LabelConvention {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::RealIsOne => LabelConvention::RealIsOne,
            ConventionArg::RealIsZero => LabelConvention::RealIsZero,
        }
    }
}
