//! Verity CLI - Score the credibility of a news text from the command line.
//!
//! Reports go to stdout as JSON (or a table). Every failure is printed as a
//! JSON error object on stdout and exits with status 1.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use verity_cli::commands;
use verity_cli::repl;
use verity_cli::cli::{ConfigAction, ConfigArgs};
use verity_cli::{Cli, CliError, Command, Config, Formatter};
use verity_pipeline::DefaultPipeline;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        println!(
            "{}",
            serde_json::to_string(&e.to_response())
                .unwrap_or_else(|_| r#"{"error":"Prediction failed"}"#.to_string())
        );
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries JSON only.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("VERITY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> verity_cli::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(CliError::InvalidArguments(e.to_string().trim().to_string())),
    };

    // Writing a fresh config must not require a readable one
    if let Some(Command::Config(ConfigArgs {
        action: ConfigAction::Init { force },
    })) = cli.command
    {
        let path = match &cli.config {
            Some(path) => PathBuf::from(path),
            None => Config::path()?,
        };
        println!("{}", commands::execute_config_init(&path, force)?);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load().unwrap_or_else(|e| {
            warn!("Ignoring unreadable config file: {}", e);
            Config::default()
        }),
    };
    let config = config.with_overrides(cli.model.clone(), cli.label_convention.map(Into::into));

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let build_pipeline = || DefaultPipeline::from_config(&config.pipeline);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&build_pipeline()?, &config, &formatter)?;
        }
        Some(Command::Analyze(args)) => {
            let pipeline = build_pipeline()?;
            let output =
                commands::execute_analyze(&args, std::io::stdin().lock(), &pipeline, &formatter)?;
            println!("{}", output);
        }
        Some(Command::Features(args)) => {
            let pipeline = build_pipeline()?;
            let output =
                commands::execute_features(&args, std::io::stdin().lock(), &pipeline, &formatter)?;
            println!("{}", output);
        }
        Some(Command::Schema) => {
            println!("{}", commands::execute_schema(&formatter)?);
        }
        Some(Command::Config(_)) => {
            println!("{}", commands::execute_config_show(&config)?);
        }
    }

    Ok(())
}
