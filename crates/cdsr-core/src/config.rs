use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::build::ItemLayout;
use crate::decode::DecoderOptions;
use crate::metadata::DEFAULT_ANTENNA;

/// How the CLI prints decoded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/cdsr/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CdsrConfig {
    /// Antenna recorded for families without an antenna token (CBERS2B, LANDSAT).
    pub default_antenna: String,
    /// Ground stations accepted in addition to the built-in ones.
    #[serde(default)]
    pub extra_antennas: Vec<String>,
    /// Item name layout: "antenna" (default) or "processing".
    #[serde(default)]
    pub item_layout: ItemLayout,
    /// Output of `cdsr decode`: "text" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for CdsrConfig {
    fn default() -> Self {
        Self {
            default_antenna: DEFAULT_ANTENNA.to_string(),
            extra_antennas: Vec::new(),
            item_layout: ItemLayout::default(),
            output: OutputFormat::default(),
        }
    }
}

impl CdsrConfig {
    /// Decoder options described by this configuration.
    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions {
            default_antenna: self.default_antenna.clone(),
            ..DecoderOptions::default()
        }
        .with_antennas(self.extra_antennas.iter().cloned())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cdsr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CdsrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CdsrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<CdsrConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: CdsrConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
