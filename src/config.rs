// src/config.rs

use crate::constants::{AUTOPLAY_INTERVAL_SECS, DEFAULT_LOG_FILTER};
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// SQLite file holding persisted preferences; in-memory when absent.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default = "default_autoplay_interval_secs")]
    pub autoplay_interval_secs: u64,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_autoplay_interval_secs() -> u64 {
    AUTOPLAY_INTERVAL_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            storage_path: None,
            log_filter: default_log_filter(),
            autoplay_interval_secs: default_autoplay_interval_secs(),
        }
    }
}

impl AppConfig {
    pub fn from_json_str(data: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.autoplay_interval_secs == 0 {
            return Err(CatalogError::Config(
                "autoplay_interval_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_secs(self.autoplay_interval_secs)
    }
}
