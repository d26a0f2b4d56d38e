use serde::{Deserialize, Serialize};

use crate::config::SupplierConfig;

/// Stock condition of an imported unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    New,
    Used,
}

/// Supplier reference as the inventory importer expects it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub phone: String,
}

impl From<&SupplierConfig> for Supplier {
    fn from(config: &SupplierConfig) -> Self {
        Self {
            name: config.name.clone(),
            phone: config.phone.clone(),
        }
    }
}

/// Purchase batch the unit arrived in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    /// Price as listed on the vendor sheet, before markup
    pub unit_cost: f64,
    pub quantity: u32,
}

/// One normalized phone record ready for import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Display name, "{brand} {model}"
    pub name: String,
    pub brand: String,
    pub model: String,
    pub category: String,
    /// Optional attributes joined as "Key: value, Key: value"
    pub description: String,
    pub condition: Condition,
    pub quality: String,
    pub item_type: String,
    /// Always `batch.unit_cost` times the configured markup
    pub selling_price: f64,
    pub stock_quantity: u32,
    /// First serial, or empty when the row had none
    pub barcode: String,
    pub supplier: Supplier,
    pub batch: Batch,
    pub serials: Vec<String>,
}
