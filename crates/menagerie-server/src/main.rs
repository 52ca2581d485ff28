//! Menagerie server binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Initialize structured logging (tracing)
//! 3. Open the store: `PostgreSQL` when `DATABASE_URL` is set, otherwise
//!    the in-memory backend
//! 4. Load the view templates
//! 5. Serve until `Ctrl-C`, then close the store

use std::sync::Arc;

use menagerie_db::{AnimalStore, PostgresConfig};
use menagerie_server::{AppState, ServerConfig, ViewEngine, start_server};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the database cannot be
/// reached, the templates fail to load, or the server fails to bind.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }

    info!(
        host = config.host,
        port = config.port,
        public_dir = config.public_dir,
        "menagerie-server starting"
    );

    let store = match &config.database_url {
        Some(url) => {
            let pg = PostgresConfig::new(url)
                .with_max_connections(config.max_connections)
                .with_acquire_timeout(config.connect_timeout)
                .with_idle_timeout(config.idle_timeout);
            AnimalStore::connect(&pg).await?
        }
        None => {
            warn!("DATABASE_URL not set, using in-memory store; data will not survive a restart");
            AnimalStore::in_memory()
        }
    };
    info!(backend = store.backend_name(), "Store ready");

    let views = match &config.templates_dir {
        Some(dir) => ViewEngine::from_dir(dir)?,
        None => ViewEngine::builtin()?,
    };

    let state = Arc::new(AppState::new(
        store.clone(),
        views,
        config.public_dir.clone(),
    ));

    let result = start_server(&config, state).await;
    store.close().await;
    info!("menagerie-server shut down");

    result.map_err(Into::into)
}
