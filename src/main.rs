//! Connectify server - main entry point
//!
//! Serves the contacts JSON API over HTTP.

use anyhow::Result;
use connectify::server::{self, AppState};
use connectify::{
    Config, ContactService, ContactServiceImpl, ContactStore, JsonFileContactStore,
    MemoryContactStore,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

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

    let store: Arc<dyn ContactStore> = match &config.data_file {
        Some(path) => {
            info!("Using JSON document store at {}", path.display());
            Arc::new(JsonFileContactStore::open(path.clone()).await?)
        }
        None => {
            info!("Using in-memory store; contacts are lost on restart");
            Arc::new(MemoryContactStore::new())
        }
    };

    let service = Arc::new(ContactServiceImpl::new(store)) as Arc<dyn ContactService>;
    let state = AppState::new(service, &config.frontend_url);

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Server started on {}", listener.local_addr()?);
    info!("Allowing cross-origin requests from {}", config.frontend_url);

    server::run_server(listener, state).await?;

    info!("Server shutdown complete");
    Ok(())
}
