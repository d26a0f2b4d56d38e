use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{AccessoryRow, InventoryItem};

/// Write phone items as a pretty-printed JSON array
pub fn write_items_json(items: &[InventoryItem], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, items).context("Failed to write JSON")?;
    writer.flush().context("Failed to flush JSON output")?;
    Ok(())
}

/// Write accessory rows under the original header
pub fn write_accessory_csv(headers: &[String], rows: &[AccessoryRow], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    write_accessory_records(headers, rows, file)
        .with_context(|| format!("Failed to write CSV: {:?}", path))
}

/// Serialize accessory rows as CSV into any writer
pub fn write_accessory_records<W: Write>(
    headers: &[String],
    rows: &[AccessoryRow],
    writer: W,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row.to_record(headers))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Batch, Condition, Supplier};

    #[test]
    fn test_write_accessory_records_keeps_columns() {
        let headers: Vec<String> = ["Code", "Brand", "Model", "Description"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut row = AccessoryRow {
            brand: "MOXOM".to_string(),
            model: "MX-VS138".to_string(),
            category: "holder".to_string(),
            description: "MOXOM MX-VS138, magnetic".to_string(),
            ..Default::default()
        };
        row.extra.insert("Code".to_string(), "A-1".to_string());

        let mut buffer = Vec::new();
        write_accessory_records(&headers, &[row], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(
            text,
            "Code,Brand,Model,Description\nA-1,MOXOM,MX-VS138,\"MOXOM MX-VS138, magnetic\"\n"
        );
    }

    #[test]
    fn test_write_items_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("inventory_import.json");
        let item = InventoryItem {
            name: "Apple iPhone 11".to_string(),
            brand: "Apple".to_string(),
            model: "iPhone 11".to_string(),
            category: "Phone".to_string(),
            description: "Storage: 64GB".to_string(),
            condition: Condition::Used,
            quality: "Original".to_string(),
            item_type: "phone".to_string(),
            selling_price: 0.0,
            stock_quantity: 1,
            barcode: String::new(),
            supplier: Supplier {
                name: "MobileZone".to_string(),
                phone: "70300065".to_string(),
            },
            batch: Batch {
                unit_cost: 0.0,
                quantity: 1,
            },
            serials: vec![],
        };

        write_items_json(&[item.clone()], &path).unwrap();

        let written: Vec<InventoryItem> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, vec![item]);
    }

    #[test]
    fn test_write_empty_items_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        write_items_json(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
