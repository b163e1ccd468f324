//! Configuration loading and management
//!
//! Settings come from an optional YAML file, then environment variables
//! override individual fields:
//!
//! | Variable | Field |
//! |---|---|
//! | `SALESBOOK_BIND` | `server.bind` |
//! | `SALESBOOK_BACKEND` | `storage.backend` (`in_memory` or `mongodb`) |
//! | `SALESBOOK_MONGODB_URI` | `storage.mongodb.uri` |
//! | `SALESBOOK_MONGODB_DATABASE` | `storage.mongodb.database` |
//! | `SALESBOOK_LOG` | `log_level` |

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Which invoice store to run against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    #[default]
    InMemory,
    Mongodb,
}

impl std::str::FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "in_memory" | "in-memory" | "memory" => Ok(Backend::InMemory),
            "mongodb" | "mongo" => Ok(Backend::Mongodb),
            other => bail!("Unknown storage backend '{}'", other),
        }
    }
}

/// MongoDB connection and collection names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub invoices_collection: String,
    /// Externally owned employee directory joined by the top-employees report
    pub employees_collection: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "salesbook".to_string(),
            invoices_collection: "orders".to_string(),
            employees_collection: "employees".to_string(),
        }
    }
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: Backend,
    pub mongodb: MongoConfig,
}

/// Complete service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from an optional file, then apply process environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup
    ///
    /// Takes the lookup as a function so it can be exercised without
    /// touching the process environment.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(bind) = lookup("SALESBOOK_BIND") {
            self.server.bind = bind;
        }
        if let Some(backend) = lookup("SALESBOOK_BACKEND") {
            self.storage.backend = backend.parse()?;
        }
        if let Some(uri) = lookup("SALESBOOK_MONGODB_URI") {
            self.storage.mongodb.uri = uri;
        }
        if let Some(database) = lookup("SALESBOOK_MONGODB_DATABASE") {
            self.storage.mongodb.database = database;
        }
        if let Some(level) = lookup("SALESBOOK_LOG") {
            self.log_level = level;
        }
        Ok(self)
    }
}
