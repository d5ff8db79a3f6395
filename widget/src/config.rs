//! Configuration loading (.memwidget.toml)

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::output::OutputFormat;

/// Config file name searched for by [`WidgetFileConfig::load`]
pub const CONFIG_FILE: &str = ".memwidget.toml";

/// Directory under the platform config dir holding the global config
pub const APP_DIR: &str = "memwidget";

/// Top-level widget configuration (from .memwidget.toml)
#[derive(Debug, Default, Deserialize)]
pub struct WidgetFileConfig {
    #[serde(default)]
    pub memory: MemorySectionConfig,
    #[serde(default)]
    pub demo: DemoSectionConfig,
    #[serde(default)]
    pub output: OutputSectionConfig,
}

/// Memory widget section
#[derive(Debug, Deserialize)]
pub struct MemorySectionConfig {
    /// Refresh interval in seconds
    #[serde(default = "default_memory_interval")]
    pub interval: u64,
    /// Width of each usage bar in cells
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

/// Demo widget section
#[derive(Debug, Deserialize)]
pub struct DemoSectionConfig {
    #[serde(default = "default_demo_interval")]
    pub interval: u64,
}

/// Output section
#[derive(Debug, Default, Deserialize)]
pub struct OutputSectionConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

// Default value functions
fn default_memory_interval() -> u64 {
    5
}

fn default_demo_interval() -> u64 {
    60
}

fn default_bar_width() -> usize {
    20
}

impl Default for MemorySectionConfig {
    fn default() -> Self {
        Self {
            interval: default_memory_interval(),
            bar_width: default_bar_width(),
        }
    }
}

impl Default for DemoSectionConfig {
    fn default() -> Self {
        Self {
            interval: default_demo_interval(),
        }
    }
}

impl WidgetFileConfig {
    /// Load config.
    ///
    /// An explicit path must exist. Otherwise the search order is:
    /// 1. Walk up directory tree from cwd looking for .memwidget.toml
    /// 2. Check <config_dir>/memwidget/.memwidget.toml (global fallback)
    /// 3. Fall back to defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        if let Some(config_path) = memwidget_common::find_config_file(CONFIG_FILE, APP_DIR) {
            tracing::debug!("Loading config from: {}", config_path.display());
            return Self::load_from_path(&config_path);
        }

        tracing::debug!("No {} found, using defaults", CONFIG_FILE);
        Ok(Self::default())
    }

    /// Load from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: WidgetFileConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }
}
