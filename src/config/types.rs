use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::Resource;
use crate::query::PageSize;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL all endpoint paths are joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Startup UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Initial page size (one of 5, 10, 20, 50).
    #[serde(default)]
    pub page_size: PageSize,
    /// Collection opened at startup ("users" or "products").
    #[serde(default = "default_start_resource")]
    pub start_resource: String,
}

/// Log sink settings. Logs go to a file because the TUI owns the terminal;
/// with no file configured, logging is off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

fn default_start_resource() -> String {
    "users".to_string()
}

fn default_log_filter() -> String {
    "datadeck=info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            start_resource: default_start_resource(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: default_log_filter(),
        }
    }
}

impl Config {
    /// The startup resource. Validation guarantees the string parses.
    pub fn start_resource(&self) -> Resource {
        self.ui
            .start_resource
            .parse()
            .unwrap_or(Resource::Users)
    }
}
