//! Configuration loading
//!
//! Database settings come from the environment (a `.env` file is read at
//! startup). Transform settings come from an optional TOML file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::transfer::TransformConfig;

const DEFAULT_APP_NAME: &str = "event-sync";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the event collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub app_name: String,
    /// Server selection timeout
    pub timeout: Duration,
}

/// Values given on the command line, taking precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct DatabaseOverrides {
    pub uri: Option<String>,
    pub database: Option<String>,
    pub collection: Option<String>,
}

impl DatabaseConfig {
    /// Resolve settings from overrides, then the process environment
    pub fn from_env(overrides: DatabaseOverrides) -> Result<Self> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    fn resolve(
        overrides: DatabaseOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let require = |value: Option<String>, key: &str| -> Result<String> {
            value
                .or_else(|| lookup(key))
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{} is not set (add it to .env or pass it as a flag)", key))
        };

        let uri = require(overrides.uri, "MONGODB_URI")?;
        let database = require(overrides.database, "DB_NAME")?;
        let collection = require(overrides.collection, "COLLECTION_NAME")?;

        let app_name = lookup("MONGODB_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        let timeout_secs = match lookup("MONGODB_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("MONGODB_TIMEOUT_SECS is not a number: {}", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            uri,
            database,
            collection,
            app_name,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Default location of the transform config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("event-sync").join("config.toml"))
}

/// Load transform settings
///
/// An explicit path must exist. Without one, the per-user config file is used
/// when present, otherwise the built-in defaults.
pub fn load_transform_config(explicit: Option<&Path>) -> Result<TransformConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => path,
            None => {
                log::debug!("No config file found, using default transform settings");
                return Ok(TransformConfig::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: TransformConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    log::info!("Loaded transform settings from {}", path.display());
    Ok(config)
}
