use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Supplier attached to every imported phone
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SupplierConfig {
    pub name: String,
    pub phone: String,
}

impl Default for SupplierConfig {
    fn default() -> Self {
        Self {
            name: "MobileZone".to_string(),
            phone: "70300065".to_string(),
        }
    }
}

/// File names looked up inside the base directory
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceFiles {
    /// New phone stock sheet
    pub new_stock: String,
    /// Used phone sheet
    pub used_stock: String,
    /// JSON document written by the phone importer
    pub inventory_output: String,
    /// CSV written by the accessory fixer (next to its input)
    pub accessories_output: String,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            new_stock: "PHONE STOCK PRICES.csv".to_string(),
            used_stock: "used iphones.csv f.csv 1.csv".to_string(),
            inventory_output: "inventory_import.json".to_string(),
            accessories_output: "accs_fixed.csv".to_string(),
        }
    }
}

/// Configuration for both cleaning pipelines
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Multiplier applied to unit cost to get the selling price
    pub markup_factor: f64,
    /// Category assigned to every imported phone
    pub category: String,
    /// Quality grade assigned to every imported phone
    pub quality: String,
    /// Item type tag read by the inventory importer
    pub item_type: String,
    pub supplier: SupplierConfig,
    pub files: SourceFiles,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            markup_factor: 1.5,
            category: "Phone".to_string(),
            quality: "Original".to_string(),
            item_type: "phone".to_string(),
            supplier: SupplierConfig::default(),
            files: SourceFiles::default(),
        }
    }
}

impl CleanerConfig {
    /// Load config from a TOML file; missing keys fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse config from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CleanerConfig = toml::from_str(content)?;
        if !config.markup_factor.is_finite() || config.markup_factor < 0.0 {
            anyhow::bail!("markup_factor must be a non-negative number, got {}", config.markup_factor);
        }
        Ok(config)
    }

    /// Load from an optional path, using defaults when none is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
