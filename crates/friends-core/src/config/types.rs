//! Configuration type definitions

use crate::format::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tool configuration, read from a TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Graph file to load when `--graph` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<PathBuf>,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Lowercase and trim person and school names on load and in queries
    #[serde(default = "default_normalize_names")]
    pub normalize_names: bool,
}

fn default_normalize_names() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            graph: None,
            format: OutputFormat::default(),
            normalize_names: default_normalize_names(),
        }
    }
}
