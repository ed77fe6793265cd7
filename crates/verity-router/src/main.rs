//! Verity Router CLI
//!
//! Starts the HTTP server that serves credibility reports.

use std::env;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use verity_router::{config::RouterConfig, start_server, RouterError};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), RouterError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        RouterConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using default configuration");
        eprintln!("Usage: verity-router --config <path-to-config.toml>");
        eprintln!();
        RouterConfig::default_test_config()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Verity Router - Credibility Analysis HTTP Service");
    println!();
    println!("USAGE:");
    println!("    verity-router --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    verity-router --config config/router.toml");
    println!();
    println!("ENDPOINTS:");
    println!("    GET  /              Banner");
    println!("    GET  /health        Model residency");
    println!("    POST /predict       Analyze {{\"text\": ..., \"title\": ...}}");
    println!("    POST /api/analyze   Same as /predict");
    println!();
    println!("CONFIGURATION:");
    println!("    - bind_address: IP address to bind (default '127.0.0.1')");
    println!("    - bind_port: Port number (default 5000)");
    println!("    - cors: Allow any origin (default true)");
    println!("    - [pipeline] model_path: Model artifact JSON (default 'model.json')");
    println!("    - [pipeline] eager_load: Load the model at startup (default false)");
    println!("    - [pipeline] label_convention: 'real-is-one' or 'real-is-zero'");
    println!();
    println!("Log level is controlled by RUST_LOG (default 'info').");
}
