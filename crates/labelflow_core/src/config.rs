use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::manifest::ScanOptions;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "labelflow.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scan: ScanOptions,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_file_name")]
    pub default_file_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_file_name: default_export_file_name(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
        }
    }
}

fn default_export_file_name() -> String {
    "labels.csv".to_string()
}

fn default_window_title() -> String {
    "Label Flow".to_string()
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if it exists; fall back to defaults when it is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(cfg) => {
                tracing::info!("loaded config from {}", path.display());
                cfg
            }
            Err(e) => {
                tracing::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}
