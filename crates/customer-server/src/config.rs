//! Server configuration
//!
//! Sources, lowest priority first: built-in defaults, an optional
//! `customer-server.{toml,yaml,json}` file in the working directory, then
//! `CUSTOMER_*` environment variables (e.g. `CUSTOMER_BIND_ADDRESS`).

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;

pub const CONFIG_FILE_NAME: &str = "customer-server";
pub const ENV_PREFIX: &str = "CUSTOMER";

type Builder = ::config::ConfigBuilder<::config::builder::DefaultState>;

/// Which `CustomerStore` implementation to run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Sqlite => write!(f, "sqlite"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub storage: StorageBackend,
    pub database_path: String,
    pub log_level: String,
    pub max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from defaults, the optional file, and the environment
    pub fn load() -> Result<Self> {
        let builder = Self::defaults()?
            .add_source(::config::File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(::config::Environment::with_prefix(ENV_PREFIX));

        Self::from_builder(builder)
    }

    fn defaults() -> Result<Builder> {
        Ok(::config::Config::builder()
            .set_default("bind_address", "0.0.0.0:8080")?
            .set_default("storage", "sqlite")?
            .set_default("database_path", "data/customers.db")?
            .set_default("log_level", "info")?
            .set_default("max_connections", 5)?)
    }

    fn from_builder(builder: Builder) -> Result<Self> {
        let config: ServerConfig = builder
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Failed to parse configuration")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;

        if self.storage == StorageBackend::Sqlite && self.database_path.trim().is_empty() {
            bail!("database_path must be set when storage is sqlite");
        }
        if self.max_connections == 0 {
            bail!("max_connections must be at least 1");
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.bind_address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_builder(ServerConfig::defaults().unwrap()).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.storage, StorageBackend::Sqlite);
        assert_eq!(config.database_path, "data/customers.db");
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_overrides() {
        let builder = ServerConfig::defaults()
            .unwrap()
            .set_override("storage", "memory")
            .unwrap()
            .set_override("bind_address", "127.0.0.1:9000")
            .unwrap();

        let config = ServerConfig::from_builder(builder).unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.socket_addr().unwrap().port(), 9000);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_addr = ServerConfig::defaults()
            .unwrap()
            .set_override("bind_address", "not an address")
            .unwrap();
        assert!(ServerConfig::from_builder(bad_addr).is_err());

        let bad_backend = ServerConfig::defaults()
            .unwrap()
            .set_override("storage", "postgres")
            .unwrap();
        assert!(ServerConfig::from_builder(bad_backend).is_err());

        let no_pool = ServerConfig::defaults()
            .unwrap()
            .set_override("max_connections", 0)
            .unwrap();
        assert!(ServerConfig::from_builder(no_pool).is_err());
    }
}
