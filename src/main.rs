use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod models;
mod services;
mod utils;

use commands::Cli;
use config::AppConfig;

fn main() {
    dotenv::dotenv().ok();

    // Logs go to stderr so stdout carries only the prediction table
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("btc_power_law=info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("Parsed arguments: {:?}", cli);

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    debug!(
        "Model: C={}, k={}, epoch={}",
        config.model.scale(),
        config.model.exponent(),
        config.model.epoch()
    );

    if let Err(e) = commands::run(&cli, &config) {
        error!("Command failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
