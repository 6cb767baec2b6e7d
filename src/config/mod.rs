//! Configuration loading for reportcheck.
//!
//! A config file is optional. When present it can switch check families
//! off and override any part of the field catalog; everything it leaves
//! out keeps the built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::Catalog;

pub mod defaults;

pub use defaults::*;

/// Config file picked up from the working directory
pub const LOCAL_CONFIG_FILE: &str = "reportcheck.yaml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub checks: ChecksConfig,
    #[serde(default)]
    pub catalog: Catalog,
}

impl Config {
    /// Load configuration.
    /// Lookup order (first match wins):
    /// 1. `explicit`, which must exist
    /// 2. ./reportcheck.yaml
    /// 3. Global config (<config dir>/reportcheck/config.yaml)
    /// 4. Built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with(
            explicit,
            Path::new(LOCAL_CONFIG_FILE),
            global_config_path().as_deref(),
        )
    }

    /// Same as [`Config::load`] with the local and global locations given.
    pub fn load_with(explicit: Option<&Path>, local: &Path, global: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Self::load_from(path);
        }

        let found = std::iter::once(local)
            .chain(global)
            .find(|path| path.exists());

        match found {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        debug!(path = %path.display(), "loading config");
        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(content).context("Failed to parse config")?;

        config.catalog.validate().context("Invalid catalog")?;

        Ok(config)
    }
}

/// Returns the path to the global config file, e.g.
/// ~/.config/reportcheck/config.yaml on Linux
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("reportcheck").join("config.yaml"))
}
