//! Configuration for the result file checker
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (nvbench-json.toml)
//! - Environment variables (NVBENCH_JSON__*)
//!
//! ## Example config file (nvbench-json.toml):
//! ```toml
//! [check]
//! fail_on_mismatch = true
//!
//! [scan]
//! recursive = true
//! extensions = ["json"]
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Main configuration for the checker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Version check settings
    #[serde(default)]
    pub check: CheckConfig,

    /// Input discovery settings
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Version check configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Exit non-zero when any document is unversioned or mismatched
    #[serde(default)]
    pub fail_on_mismatch: bool,
}

/// Input discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,

    /// File extensions treated as result documents
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["json".to_string()]
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            extensions: default_extensions(),
        }
    }
}

impl CheckerConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, optionally layering a specific file on top
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        for location in ["nvbench-json", ".nvbench-json"] {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(dirs) = directories::ProjectDirs::from("com", "nvbench", "nvbench-json") {
            let xdg_config = dirs.config_dir().join("nvbench-json.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("NVBENCH_JSON")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}
