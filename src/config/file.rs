//! File-based configuration loading
//!
//! Loads the vendor registry definition from a JSON file

use crate::providers::VendorKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "LLMNORM_CONFIG";

/// Application configuration loaded from JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Vendor definitions keyed by registry name
    pub vendors: HashMap<String, VendorConfig>,
}

/// Vendor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorConfig {
    /// Envelope family ("openai", "anthropic", "gemini", "ollama")
    #[serde(rename = "type")]
    pub vendor_type: VendorKind,

    /// Display label used in logs and error messages (defaults to the family label)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl VendorConfig {
    fn new(vendor_type: VendorKind, label: &str) -> Self {
        Self {
            vendor_type,
            label: Some(label.to_string()),
        }
    }
}

impl Default for AppConfig {
    /// Built-in vendor set
    fn default() -> Self {
        let vendors = [
            ("openai", VendorConfig::new(VendorKind::OpenAI, "OpenAI")),
            ("anthropic", VendorConfig::new(VendorKind::Anthropic, "Anthropic")),
            ("gemini", VendorConfig::new(VendorKind::Gemini, "Gemini")),
            ("deepseek", VendorConfig::new(VendorKind::OpenAI, "DeepSeek")),
            ("ollama", VendorConfig::new(VendorKind::Ollama, "Ollama")),
            ("lmstudio", VendorConfig::new(VendorKind::OpenAI, "LM Studio")),
        ]
        .into_iter()
        .map(|(name, vendor)| (name.to_string(), vendor))
        .collect();

        Self { vendors }
    }
}

impl AppConfig {
    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| "Failed to parse config JSON")?;

        config.validate()?;

        debug!("Loaded {} vendors", config.vendors.len());
        Ok(config)
    }

    /// Load configuration from default locations
    /// Searches in order:
    /// 1. $LLMNORM_CONFIG
    /// 2. ~/.config/llmnorm/llmnorm.json
    /// 3. ./llmnorm.json
    ///
    /// Falls back to the built-in vendor set when no file is found.
    /// An explicit $LLMNORM_CONFIG that does not exist is an error.
    pub fn load_default() -> Result<Self> {
        if let Ok(explicit) = std::env::var(CONFIG_PATH_ENV) {
            return Self::load(Path::new(&explicit));
        }

        match Self::default_locations().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load(&path),
            None => {
                info!("No configuration file found, using built-in vendors");
                Ok(Self::default())
            }
        }
    }

    fn default_locations() -> Vec<PathBuf> {
        let mut locations = Vec::new();
        if let Some(home) = dirs::home_dir() {
            locations.push(home.join(".config").join("llmnorm").join("llmnorm.json"));
        }
        locations.push(PathBuf::from("llmnorm.json"));
        locations
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.vendors.is_empty() {
            anyhow::bail!("At least one vendor must be configured");
        }

        let mut seen = HashSet::new();
        for (name, vendor) in &self.vendors {
            if name.is_empty() || name.contains(|c: char| c.is_whitespace() || c == '/') {
                anyhow::bail!("Invalid vendor name '{}'", name);
            }

            if !seen.insert(name.to_lowercase()) {
                anyhow::bail!("Duplicate vendor name '{}' (names are case-insensitive)", name);
            }

            if let Some(label) = &vendor.label {
                if label.trim().is_empty() {
                    anyhow::bail!("Vendor '{}' has an empty label", name);
                }
            }
        }

        Ok(())
    }
}
