mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::{debug, warn};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`) and applies
/// environment overrides.
///
/// A missing default file yields the built-in defaults; a missing file named
/// explicitly through `CONFIG_PATH` is an error.
pub async fn load() -> Result<Config> {
    let explicit = env::var("CONFIG_PATH").ok();
    let config_path = explicit.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

    let config = if explicit.is_none() && !Path::new(config_path).exists() {
        warn!(
            "No configuration file at {}, using defaults",
            DEFAULT_CONFIG_PATH
        );
        Config::default()
    } else {
        load_from_path(config_path).await?
    };

    apply_overrides(config, |key| env::var(key).ok())
}

pub async fn load_from_path(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    from_yaml_str(&config_str)
}

pub fn from_yaml_str(config_str: &str) -> Result<Config> {
    // An empty document is valid and means "all defaults".
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(config_str)?;
    Ok(config)
}

/// Applies `HOST`, `PORT` and `API_VARIANT` overrides using `lookup` to read
/// variables.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("HOST") {
        debug!("Overriding host from environment: {}", host);
        config.server.host = host;
    }

    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        debug!("Overriding port from environment: {}", config.server.port);
    }

    if let Some(variant) = lookup("API_VARIANT") {
        config.service.variant = variant.parse().map_err(Error::config)?;
        debug!("Overriding API variant from environment: {}", variant);
    }

    Ok(config)
}
