use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

pub const DEFAULT_BANNER: &str = "toolrelay ready";
pub const DEFAULT_SEARCH_TEMPLATE: &str = "Search results for: {query}";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Readiness line written to stdout before the first command is read.
    pub banner: String,
    pub market: MarketConfig,
    pub search: SearchConfig,
}

/// Extra market data merged over the built-in tables. Entries here win.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub aliases: BTreeMap<String, String>,
    pub quotes: BTreeMap<String, Quote>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price: f64,
    pub change: f64,
}

impl Quote {
    pub const fn new(price: f64, change: f64) -> Self {
        Self { price, change }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Result text; `{query}` is replaced by the query string.
    pub template: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            market: MarketConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| write_err(std::io::Error::other(e)))?;
        std::fs::write(path, content).map_err(write_err)
    }
}
