//! Configuration for friends
//!
//! Configuration lives in an optional TOML file passed with `--config`
//! (or `FRIENDS_CONFIG`). Every key is optional.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use types::Config;

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Normalize a person or school name according to `normalize_names`
    pub fn normalize(&self, name: &str) -> String {
        if self.normalize_names {
            name.trim().to_lowercase()
        } else {
            name.to_string()
        }
    }
}
