//! Salesbook server binary
//!
//! ```sh
//! salesbook [config.yaml]
//! ```
//!
//! The config path may also be given as `SALESBOOK_CONFIG`.

use anyhow::Result;
use salesbook::config::{AppConfig, Backend};
use salesbook::server::ServerBuilder;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SALESBOOK_CONFIG").ok())
        .map(PathBuf::from);
    let config = AppConfig::load(path.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!(
        "Starting salesbook v{} ({:?} backend)",
        env!("CARGO_PKG_VERSION"),
        config.storage.backend
    );

    match config.storage.backend {
        Backend::InMemory => {
            ServerBuilder::new()
                .with_store(salesbook::storage::InMemoryInvoiceStore::new())
                .serve(&config.server.bind)
                .await
        }
        Backend::Mongodb => serve_mongodb(&config).await,
    }
}

#[cfg(feature = "mongodb_backend")]
async fn serve_mongodb(config: &AppConfig) -> Result<()> {
    let (client, store) = salesbook::storage::mongodb::connect(&config.storage.mongodb).await?;
    store.ensure_indexes().await?;

    tracing::info!(
        database = %config.storage.mongodb.database,
        collection = %config.storage.mongodb.invoices_collection,
        "Connected to MongoDB"
    );

    let result = ServerBuilder::new()
        .with_store(store)
        .serve(&config.server.bind)
        .await;

    client.shutdown().await;
    tracing::info!("MongoDB client closed");

    result
}

#[cfg(not(feature = "mongodb_backend"))]
async fn serve_mongodb(_config: &AppConfig) -> Result<()> {
    anyhow::bail!("the mongodb backend requires building with the `mongodb_backend` feature")
}
