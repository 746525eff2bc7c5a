//! Application configuration
//!
//! Optional settings loaded from gh-pr-export.toml.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

const CONFIG_FILE: &str = "gh-pr-export.toml";

/// Application configuration loaded from gh-pr-export.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory the report files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    "output".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default config");
        Self::default()
    }
}

/// Load config file content from CWD first, then home directory
///
/// Searches for gh-pr-export.toml in:
/// 1. Current working directory
/// 2. Home directory as .gh-pr-export.toml
fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    if let Some(home_config) = home_config_path() {
        if let Ok(content) = std::fs::read_to_string(&home_config) {
            log::debug!("Loaded config from {}", home_config.display());
            return Some(content);
        }
    }

    None
}

fn home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(format!(".{CONFIG_FILE}")))
}
