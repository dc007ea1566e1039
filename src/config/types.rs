use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogSource,
    #[serde(default)]
    pub display: Display,
    #[serde(default)]
    pub logging: Logging,
}

/// Where the catalog data comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSource {
    /// Path to a catalog JSON file. When unset, the embedded default
    /// catalog is used.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Display {
    /// Currency symbol shown before prices (default: "$").
    #[serde(default = "default_currency")]
    pub currency: String,
    /// UI tick interval in milliseconds (default: 250, minimum: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Logging settings. The TUI owns stdout, so logs only ever go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    /// Log file path. Logging is disabled when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Log level filter (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Display {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::default(),
            display: Display::default(),
            logging: Logging::default(),
        }
    }
}
