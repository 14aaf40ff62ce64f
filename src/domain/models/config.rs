use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Remote record service settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Catalog acquisition and paging
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Detail hydration behavior
    #[serde(default)]
    pub hydration: HydrationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote record service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ApiConfig {
    /// Base URL of the record service, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request deadline in seconds. `None` waits indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_user_agent() -> String {
    concat!("pokedex/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

/// Catalog acquisition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogConfig {
    /// Number of entries requested from the list endpoint
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,

    /// Offset of the first requested entry
    #[serde(default)]
    pub list_offset: u32,

    /// Records per pagination window
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

const fn default_list_limit() -> u32 {
    151
}

const fn default_page_size() -> usize {
    20
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            list_limit: default_list_limit(),
            list_offset: 0,
            page_size: default_page_size(),
        }
    }
}

/// Detail hydration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HydrationConfig {
    /// In-flight detail requests. 1 resolves strictly one at a time.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Deadline for the whole hydration pass, in seconds
    #[serde(default)]
    pub deadline_secs: Option<u64>,
}

const fn default_concurrency() -> usize {
    1
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            deadline_secs: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default)]
    pub log_dir: Option<String>,

    /// Rotation for file output: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
