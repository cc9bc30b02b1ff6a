//! Storage layer
//!
//! SQLite (embedded) for durable records, DashMap (in-memory) for tests and
//! throwaway instances. Both implement `CustomerStore`.

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::MemoryStore;

use crate::config::{ServerConfig, StorageBackend};
use anyhow::Result;
use customer_core::CustomerStore;
use std::sync::Arc;

/// Open the backend selected in the configuration
pub async fn open(config: &ServerConfig) -> Result<Arc<dyn CustomerStore>> {
    match config.storage {
        StorageBackend::Sqlite => {
            let db = Database::new(&config.database_path, config.max_connections).await?;
            tracing::info!("SQLite database initialized at: {}", config.database_path);
            Ok(Arc::new(db))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, records will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
