//! Configuration management and loading for rbviz.

use anyhow::{Context, Result, bail};
use rbviz_layout::LayoutConfig;
use rbviz_logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Configuration file formats, picked by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Json,
    #[default]
    Yaml,
}

impl ConfigFormat {
    /// `.json` is JSON; everything else, including no extension, is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// How `show` and `run` draw the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderFormat::Text => f.write_str("text"),
            RenderFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for RenderFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(RenderFormat::Text),
            "json" => Ok(RenderFormat::Json),
            other => bail!("unknown render format '{other}' (expected text or json)"),
        }
    }
}

/// Main rbviz configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RbvizConfig {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub render: RenderFormat,

    /// Keys inserted, in order, when a session starts
    #[serde(default)]
    pub seed: Vec<i64>,
}

/// Largest coordinate or distance a layout config may name.
pub const MAX_LAYOUT_EXTENT: i64 = 1_000_000;

impl RbvizConfig {
    /// Reject layout values that cannot produce a drawable canvas.
    pub fn validate(&self) -> Result<()> {
        let layout = &self.layout;
        for (field, value) in [("origin_x", layout.origin_x), ("origin_y", layout.origin_y)] {
            if value.unsigned_abs() > MAX_LAYOUT_EXTENT.unsigned_abs() {
                bail!("layout.{field} = {value} is outside -{MAX_LAYOUT_EXTENT}..={MAX_LAYOUT_EXTENT}");
            }
        }
        if !(1..=MAX_LAYOUT_EXTENT).contains(&layout.level_spacing) {
            bail!(
                "layout.level_spacing = {} must be between 1 and {MAX_LAYOUT_EXTENT}",
                layout.level_spacing
            );
        }
        for (field, value) in [
            ("base_offset", layout.base_offset),
            ("min_offset", layout.min_offset),
            ("node_radius", layout.node_radius),
        ] {
            if !(0..=MAX_LAYOUT_EXTENT).contains(&value) {
                bail!("layout.{field} = {value} must be between 0 and {MAX_LAYOUT_EXTENT}");
            }
        }
        Ok(())
    }
}

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<RbvizConfig> {
    let contents = std::fs::read_to_string(path).with_context(|| format!("read config {path:?}"))?;
    let config: RbvizConfig = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => {
            serde_json::from_str(&contents).with_context(|| format!("parse JSON config {path:?}"))?
        }
        ConfigFormat::Yaml => {
            serde_yaml::from_str(&contents).with_context(|| format!("parse YAML config {path:?}"))?
        }
    };
    config
        .validate()
        .with_context(|| format!("invalid config {path:?}"))?;
    Ok(config)
}

/// Save configuration to a file
pub fn save_config(config: &RbvizConfig, path: &Path) -> Result<()> {
    let contents = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::to_string_pretty(config).context("serialize JSON config")?,
        ConfigFormat::Yaml => serde_yaml::to_string(config).context("serialize YAML config")?,
    };
    std::fs::write(path, contents).with_context(|| format!("write config {path:?}"))?;
    Ok(())
}
