// Standard library
use std::path::PathBuf;
use std::process::ExitCode;

// 3rd party crates
use clap::Parser;
use tokio::signal::ctrl_c;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod functions;
mod providers;
mod settings;
mod utility;

// Project imports
use crate::functions::run;
use crate::settings::types::Settings;

/// Keeps a Cloudflare A record pointed at this host's public IPv4 address.
#[derive(Debug, Parser)]
#[command(name = "cfddns", version, about)]
struct Cli {
    /// Path to the JSON configuration file.
    config_file: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let cli: Cli = Cli::parse();

    // setup logging.
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
        .add_directive("hyper_util=error".parse().unwrap())
        .add_directive("reqwest=error".parse().unwrap())
        .add_directive("hyper=error".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    // Nothing proceeds without a full configuration.
    let settings: Settings = match Settings::load(&cli.config_file) {
        Ok(settings) => settings,
        Err(e) => {
            error!(
                "Failed to load configuration from {}: {}",
                cli.config_file.display(),
                e
            );
            return ExitCode::FAILURE;
        }
    };

    info!("⚙️ Settings have been loaded.");

    // Create a broadcast channel for shutdown signal
    let (shutdown_tx, _) = broadcast::channel(1);
    let shutdown_tx_clone = shutdown_tx.clone();

    // Handle Ctrl+C
    tokio::spawn(async move {
        if let Err(e) = ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("Received shutdown signal, initiating graceful shutdown...");
        let _ = shutdown_tx_clone.send(());
    });

    if let Err(e) = run(settings, shutdown_tx.subscribe()).await {
        error!("Application error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
