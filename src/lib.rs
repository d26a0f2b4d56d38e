pub mod config;
pub mod error;
pub mod fields;
pub mod heuristics;
pub mod io;
pub mod models;
pub mod pipelines;

pub use config::{CleanerConfig, SourceFiles, SupplierConfig};
pub use error::RowRejection;
pub use fields::{extract_identifiers, join_description, parse_price};
pub use heuristics::{apply_rules, AccessoryRule, HeuristicsResult, RuleSet};
pub use io::{read_named_csv, read_positional_csv, write_accessory_csv, write_items_json};
pub use models::{AccessoryRow, Condition, InventoryItem, PhoneSource};
pub use pipelines::{
    build_item, build_items, collect_items, fix_row, fix_rows, process_file, process_files,
    AccessoryReport, PhoneImport, PipelineStats, SourceReport,
};
