//! CLI entrypoint for interlog
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod commands;

use anyhow::{Result, anyhow};
use clap::Parser;
use commands::Cli;
use interlog_application::LogInteractionUseCase;
use interlog_infrastructure::{ConfigLoader, FsInteractionStore, MonotonicClock};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let mut logger_config = file_config.logger_config();
    if let Some(dir) = &cli.log_dir {
        logger_config.log_dir = dir.clone();
    }
    debug!("Logger config: {:?}", logger_config);

    let (request, response) = cli.read_interaction(&mut std::io::stdin().lock())?;

    // === Dependency Injection ===
    let logger = LogInteractionUseCase::new(
        Arc::new(FsInteractionStore::new()),
        Arc::new(MonotonicClock::new()),
        logger_config,
    );

    info!(
        "Logging interaction ({} request bytes, {} response bytes) to {}",
        request.len(),
        response.len(),
        logger.log_dir().display()
    );

    // Awaited for sequencing only; failures were already reported
    logger.execute(&request, &response).await;

    Ok(())
}
