//! Storefront settings loaded from an optional TOML file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number the pre-filled order messages are addressed to
    pub whatsapp_number: String,
    pub currency_symbol: String,
    /// Directory product images are copied into
    pub media_dir: PathBuf,
    /// Public prefix joined with the stored image path
    pub media_base_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "5562982262543".to_string(),
            currency_symbol: "R$".to_string(),
            media_dir: PathBuf::from("product-images"),
            media_base_url: "http://localhost/product-images".to_string(),
        }
    }
}

impl Config {
    /// Load settings; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
