use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::CleanerConfig;
use crate::error::RowRejection;
use crate::fields::{extract_identifiers, join_description, parse_price};
use crate::io::{read_positional_csv, write_items_json};
use crate::models::{Batch, InventoryItem, PhoneSource, Supplier};

use super::PipelineStats;

/// Sources in the order their items appear in the output document
pub const PHONE_SOURCES: [PhoneSource; 2] = [PhoneSource::NewStock, PhoneSource::UsedStock];

/// Outcome of reading one phone sheet
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub source: PhoneSource,
    pub path: PathBuf,
    /// False when the file was not found and the source was skipped
    pub found: bool,
    pub stats: PipelineStats,
}

/// All phone items collected from a base directory
#[derive(Debug, Clone, Default)]
pub struct PhoneImport {
    pub items: Vec<InventoryItem>,
    pub reports: Vec<SourceReport>,
}

impl PhoneImport {
    pub fn total_stats(&self) -> PipelineStats {
        let mut total = PipelineStats::default();
        for report in &self.reports {
            total.merge(&report.stats);
        }
        total
    }

    /// Sum of unit costs across all items
    pub fn stock_cost(&self) -> f64 {
        self.items.iter().map(|i| i.batch.unit_cost).sum()
    }

    /// Sum of selling prices across all items
    pub fn stock_value(&self) -> f64 {
        self.items.iter().map(|i| i.selling_price).sum()
    }
}

/// Build one inventory item from a positional row
pub fn build_item(
    cells: &[String],
    source: PhoneSource,
    config: &CleanerConfig,
) -> Result<InventoryItem, RowRejection> {
    if cells.iter().all(|c| c.trim().is_empty()) {
        return Err(RowRejection::Blank);
    }

    let layout = source.layout();
    if cells.len() < layout.width() {
        return Err(RowRejection::Short {
            expected: layout.width(),
            found: cells.len(),
        });
    }

    let cell = move |index: usize| cells[index].trim();

    let brand = cell(layout.brand);
    let model = cell(layout.model);
    let serials = extract_identifiers(&cells[layout.identifiers]);
    let fragments = layout.attributes.map(|(label, index)| (label, cell(index)));
    let unit_cost = parse_price(&cells[layout.price]);

    Ok(InventoryItem {
        name: format!("{} {}", brand, model),
        brand: brand.to_string(),
        model: model.to_string(),
        category: config.category.clone(),
        description: join_description(&fragments),
        condition: source.condition(),
        quality: config.quality.clone(),
        item_type: config.item_type.clone(),
        selling_price: unit_cost * config.markup_factor,
        stock_quantity: 1,
        barcode: serials.first().cloned().unwrap_or_default(),
        supplier: Supplier::from(&config.supplier),
        batch: Batch {
            unit_cost,
            quantity: 1,
        },
        serials,
    })
}

/// Build items for every row of a sheet, skipping blank and short rows
pub fn build_items(
    rows: &[Vec<String>],
    source: PhoneSource,
    config: &CleanerConfig,
) -> (Vec<InventoryItem>, PipelineStats) {
    let mut items = Vec::with_capacity(rows.len());
    let mut stats = PipelineStats::default();

    for (index, row) in rows.iter().enumerate() {
        match build_item(row, source, config) {
            Ok(item) => {
                stats.record_emitted();
                items.push(item);
            }
            Err(rejection) => {
                debug!("Skipping {} row {}: {}", source.label(), index + 1, rejection);
                stats.record_rejection(&rejection);
            }
        }
    }

    (items, stats)
}

/// Warn when a header is narrower than the layout expects
pub fn check_header(headers: &[String], source: PhoneSource) -> bool {
    let width = source.layout().width();
    if headers.len() < width {
        warn!(
            "{} header has {} columns, expected at least {}; columns may have shifted",
            source.label(),
            headers.len(),
            width
        );
        return false;
    }
    true
}

fn source_path(base_dir: &Path, source: PhoneSource, config: &CleanerConfig) -> PathBuf {
    let name = match source {
        PhoneSource::NewStock => &config.files.new_stock,
        PhoneSource::UsedStock => &config.files.used_stock,
    };
    base_dir.join(name)
}

/// Read one phone sheet. A missing file is reported and skipped.
pub fn collect_source(
    base_dir: &Path,
    source: PhoneSource,
    config: &CleanerConfig,
) -> Result<(Vec<InventoryItem>, SourceReport)> {
    let path = source_path(base_dir, source, config);

    if !path.exists() {
        warn!("{} file not found, skipping: {:?}", source.label(), path);
        return Ok((
            vec![],
            SourceReport {
                source,
                path,
                found: false,
                stats: PipelineStats::default(),
            },
        ));
    }

    info!("Processing {:?}...", path);
    let sheet = read_positional_csv(&path)?;
    check_header(&sheet.headers, source);

    let (items, stats) = build_items(&sheet.rows, source, config);
    info!("{}: {}", source.label(), stats);

    Ok((
        items,
        SourceReport {
            source,
            path,
            found: true,
            stats,
        },
    ))
}

/// Read every phone sheet in the base directory without writing anything
pub fn collect_items(base_dir: &Path, config: &CleanerConfig) -> Result<PhoneImport> {
    let mut import = PhoneImport::default();

    for source in PHONE_SOURCES {
        let (items, report) = collect_source(base_dir, source, config)?;
        import.items.extend(items);
        import.reports.push(report);
    }

    Ok(import)
}

/// Convert the phone sheets in `base_dir` into one JSON import document
pub fn process_files(
    base_dir: &Path,
    output: &Path,
    config: &CleanerConfig,
) -> Result<PhoneImport> {
    let import = collect_items(base_dir, config)?;

    write_items_json(&import.items, output)?;
    info!(
        "Successfully converted {} items to {:?}",
        import.items.len(),
        output
    );

    Ok(import)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Condition;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_new_stock_item() {
        let row = cells(&["Apple", "iPhone 12", "111 222", "128GB", "Black", "$100"]);
        let item = build_item(&row, PhoneSource::NewStock, &CleanerConfig::default()).unwrap();

        assert_eq!(item.name, "Apple iPhone 12");
        assert_eq!(item.selling_price, 150.0);
        assert_eq!(item.batch.unit_cost, 100.0);
        assert_eq!(item.batch.quantity, 1);
        assert_eq!(item.barcode, "111");
        assert_eq!(item.serials, vec!["111", "222"]);
        assert_eq!(item.description, "Specs: 128GB, Color: Black");
        assert_eq!(item.condition, Condition::New);
        assert_eq!(item.category, "Phone");
        assert_eq!(item.quality, "Original");
        assert_eq!(item.stock_quantity, 1);
        assert_eq!(item.supplier.name, "MobileZone");
    }

    #[test]
    fn test_build_used_stock_item() {
        let row = cells(&[" Apple ", "3567 ", "iPhone 11", "87%", "64GB", "$ 80"]);
        let item = build_item(&row, PhoneSource::UsedStock, &CleanerConfig::default()).unwrap();

        assert_eq!(item.brand, "Apple");
        assert_eq!(item.model, "iPhone 11");
        assert_eq!(item.description, "Storage: 64GB, Battery: 87%");
        assert_eq!(item.condition, Condition::Used);
        assert_eq!(item.serials, vec!["3567"]);
        assert_eq!(item.selling_price, 120.0);
    }

    #[test]
    fn test_empty_attributes_give_empty_description() {
        let row = cells(&["Nokia", "3310", "", "", "", "oops"]);
        let item = build_item(&row, PhoneSource::NewStock, &CleanerConfig::default()).unwrap();

        assert_eq!(item.description, "");
        assert_eq!(item.barcode, "");
        assert!(item.serials.is_empty());
        assert_eq!(item.batch.unit_cost, 0.0);
        assert_eq!(item.selling_price, 0.0);
    }

    #[test]
    fn test_rejections() {
        let config = CleanerConfig::default();
        assert_eq!(
            build_item(&cells(&["", " ", ""]), PhoneSource::NewStock, &config),
            Err(RowRejection::Blank)
        );
        assert_eq!(
            build_item(&cells(&["Apple", "iPhone"]), PhoneSource::UsedStock, &config),
            Err(RowRejection::Short {
                expected: 6,
                found: 2
            })
        );
    }

    #[test]
    fn test_extra_cells_ignored() {
        let row = cells(&["Apple", "iPhone 13", "9", "", "", "10", "note"]);
        let item = build_item(&row, PhoneSource::NewStock, &CleanerConfig::default()).unwrap();
        assert_eq!(item.batch.unit_cost, 10.0);
    }

    #[test]
    fn test_configured_markup() {
        let config = CleanerConfig {
            markup_factor: 2.0,
            ..Default::default()
        };
        let row = cells(&["Apple", "iPhone 12", "", "", "", "$12.50"]);
        let item = build_item(&row, PhoneSource::NewStock, &config).unwrap();
        assert_eq!(item.selling_price, 25.0);
        assert_eq!(item.batch.unit_cost, 12.5);
    }

    #[test]
    fn test_build_items_counts() {
        let rows = vec![
            cells(&["Apple", "iPhone 12", "1", "", "", "$1"]),
            cells(&["", "", "", "", "", ""]),
            cells(&["Samsung", "A54"]),
            cells(&["Apple", "iPhone 13", "2", "", "", "$2"]),
        ];
        let (items, stats) = build_items(&rows, PhoneSource::NewStock, &CleanerConfig::default());

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].model, "iPhone 13");
        assert_eq!(stats.rows_read, 4);
        assert_eq!(stats.emitted, 2);
        assert_eq!(stats.skipped_blank, 1);
        assert_eq!(stats.skipped_short, 1);
    }

    #[test]
    fn test_check_header() {
        assert!(check_header(&cells(&["a", "b", "c", "d", "e", "f"]), PhoneSource::NewStock));
        assert!(!check_header(&cells(&["a", "b"]), PhoneSource::NewStock));
    }

    #[test]
    fn test_process_files_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = CleanerConfig::default();
        std::fs::write(
            dir.path().join(&config.files.new_stock),
            "Brand,Model,IMEI,Specs,Color,Price\n\
             Apple,iPhone 12,111 222,128GB,Black,$100\n\
             ,,,,,\n\
             Samsung,S21\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join(&config.files.used_stock),
            "Brand,IMEI,Model,Battery,Storage,Price\n\
             Apple,333,iPhone 11,90%,64GB,$80\n",
        )
        .unwrap();
        let output = dir.path().join(&config.files.inventory_output);

        let import = process_files(dir.path(), &output, &config).unwrap();

        assert_eq!(import.items.len(), 2);
        assert_eq!(import.total_stats().rows_read, 4);
        assert_eq!(import.total_stats().skipped(), 2);
        assert_eq!(import.stock_cost(), 180.0);
        assert_eq!(import.stock_value(), 270.0);

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        let written = written.as_array().unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0]["condition"], "New");
        assert_eq!(written[1]["condition"], "Used");
        assert_eq!(written[1]["barcode"], "333");
        assert_eq!(written[1]["description"], "Storage: 64GB, Battery: 90%");
    }

    #[test]
    fn test_missing_source_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = CleanerConfig::default();
        let output = dir.path().join("inventory.json");

        let import = process_files(dir.path(), &output, &config).unwrap();

        assert!(import.items.is_empty());
        assert!(import.reports.iter().all(|r| !r.found));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "[]");
    }
}
