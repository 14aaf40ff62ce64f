use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use reqwest::Url;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Upper bound for `catalog.page_size`
pub const MAX_PAGE_SIZE: usize = 1000;

/// Upper bound for `hydration.concurrency`
pub const MAX_CONCURRENCY: usize = 64;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base_url: {0}. Must be an http:// or https:// URL")]
    InvalidBaseUrl(String),

    #[error("Invalid list_limit: {0}. Must be at least 1")]
    InvalidListLimit(u32),

    #[error("Invalid page_size: {0}. Must be between 1 and {MAX_PAGE_SIZE}")]
    InvalidPageSize(usize),

    #[error("Invalid concurrency: {0}. Must be between 1 and {MAX_CONCURRENCY}")]
    InvalidConcurrency(usize),

    #[error("Invalid {field}: 0. Must be at least 1 second when set")]
    InvalidTimeout { field: &'static str },

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .pokedex/config.yaml
    /// 3. .pokedex/local.yaml
    /// 4. Environment variables (POKEDEX_* prefix, `__` nests)
    ///
    /// Missing files are skipped.
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".pokedex/config.yaml"))
            .merge(Yaml::file(".pokedex/local.yaml"))
            .merge(Env::prefixed("POKEDEX_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file. Environment variables
    /// still take precedence over the file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.is_file() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("POKEDEX_").split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let base_url = &config.api.base_url;
        match Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidBaseUrl(base_url.clone())),
        }

        if config.api.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidTimeout {
                field: "api.request_timeout_secs",
            });
        }

        if config.catalog.list_limit == 0 {
            return Err(ConfigError::InvalidListLimit(config.catalog.list_limit));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&config.catalog.page_size) {
            return Err(ConfigError::InvalidPageSize(config.catalog.page_size));
        }

        if !(1..=MAX_CONCURRENCY).contains(&config.hydration.concurrency) {
            return Err(ConfigError::InvalidConcurrency(config.hydration.concurrency));
        }

        if config.hydration.deadline_secs == Some(0) {
            return Err(ConfigError::InvalidTimeout {
                field: "hydration.deadline_secs",
            });
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        Ok(())
    }
}
