//! Contact Manager - Main entry point
//!
//! Starts the contact REST API using the configured storage backend.

use anyhow::Result;
use contact_manager::repositories::{
    ContactRepository, InMemoryContactRepository, SqliteContactRepository,
};
use contact_manager::{run_server, AppState, Config};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repository: Arc<dyn ContactRepository> = match &config.database_path {
        Some(path) => {
            info!("Using SQLite contact store at {}", path);
            Arc::new(SqliteContactRepository::open(path)?)
        }
        None => {
            warn!("CONTACTS_DB_PATH not set; contacts are kept in memory only");
            Arc::new(InMemoryContactRepository::new())
        }
    };

    info!("Allowing browser origin {}", config.client_url);
    run_server(&config, AppState::from_repository(repository)).await?;

    info!("Contact Manager shutdown complete");
    Ok(())
}
