//! Configuration management for the Receipt Tracker
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with RTK_ prefix

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Ledger file locations
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding both ledger files
    pub data_dir: PathBuf,

    /// Issuance ledger file name
    pub issuance_file: String,

    /// Collection ledger file name
    pub collection_file: String,
}

impl StorageConfig {
    pub fn issuance_path(&self) -> PathBuf {
        self.data_dir.join(&self.issuance_file)
    }

    pub fn collection_path(&self) -> PathBuf {
        self.data_dir.join(&self.collection_file)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("RTK_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let server = ServerConfig::default();
        let storage = StorageConfig::default();

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", i64::from(server.port))?
            .set_default("server.host", server.host)?
            .set_default(
                "storage.data_dir",
                storage.data_dir.to_string_lossy().into_owned(),
            )?
            .set_default("storage.issuance_file", storage.issuance_file)?
            .set_default("storage.collection_file", storage.collection_file)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (RTK_ prefix)
            .add_source(
                Environment::with_prefix("RTK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            issuance_file: "verilenler.csv".to_string(),
            collection_file: "alinanlar.csv".to_string(),
        }
    }
}
