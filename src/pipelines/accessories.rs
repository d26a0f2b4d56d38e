use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::heuristics::{apply_rules, HeuristicsResult, RuleSet};
use crate::io::{read_named_csv, write_accessory_csv};
use crate::models::{
    AccessoryRow, BRAND_COLUMN, CATEGORY_COLUMN, DESCRIPTION_COLUMN, MODEL_COLUMN,
};

/// Outcome of one accessory fixing run
#[derive(Debug, Clone, Default)]
pub struct AccessoryReport {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    /// False when the input file did not exist
    pub found: bool,
    pub rows: usize,
    /// Rows changed by at least one rule
    pub rows_changed: usize,
    /// How many rows each rule changed, keyed by rule name
    pub rule_hits: BTreeMap<&'static str, usize>,
}

/// Normalize a single header-keyed row
pub fn fix_row(fields: IndexMap<String, String>, rules: &RuleSet) -> (AccessoryRow, HeuristicsResult) {
    let mut row = AccessoryRow::from_named(fields);
    let result = apply_rules(&mut row, rules);
    (row, result)
}

/// Normalize every row, tallying rule hits into the report
pub fn fix_rows(
    rows: Vec<IndexMap<String, String>>,
    rules: &RuleSet,
    report: &mut AccessoryReport,
) -> Vec<AccessoryRow> {
    rows.into_iter()
        .enumerate()
        .map(|(index, fields)| {
            let (row, result) = fix_row(fields, rules);
            report.rows += 1;
            if result.changed() {
                report.rows_changed += 1;
                debug!(
                    "Row {}: {:?} -> brand={:?} model={:?} category={:?}",
                    index + 1,
                    result.fired.iter().map(|r| r.name()).collect::<Vec<_>>(),
                    row.brand,
                    row.model,
                    row.category
                );
            }
            for rule in &result.fired {
                *report.rule_hits.entry(rule.name()).or_insert(0) += 1;
            }
            row
        })
        .collect()
}

/// Warn about rule columns the sheet does not have
pub fn missing_columns(headers: &[String]) -> Vec<&'static str> {
    [BRAND_COLUMN, MODEL_COLUMN, CATEGORY_COLUMN, DESCRIPTION_COLUMN]
        .into_iter()
        .filter(|column| !headers.iter().any(|h| h == column))
        .collect()
}

/// Fix the accessory sheet at `input` and write the result to `output`.
///
/// A missing input or a sheet without data rows writes nothing.
pub fn process_file(input: &Path, output: &Path, rules: &RuleSet) -> Result<AccessoryReport> {
    let mut report = AccessoryReport {
        input: input.to_path_buf(),
        ..Default::default()
    };

    if !input.exists() {
        warn!("File not found: {:?}", input);
        return Ok(report);
    }
    report.found = true;

    info!("Processing {:?}...", input);
    let sheet = read_named_csv(input)?;

    let missing = missing_columns(&sheet.headers);
    if !missing.is_empty() {
        warn!(
            "Sheet has no {:?} column(s); inferred values for them are not written",
            missing
        );
    }

    let fixed = fix_rows(sheet.rows, rules, &mut report);
    if fixed.is_empty() {
        info!("No rows found.");
        return Ok(report);
    }

    info!("Writing {} rows to {:?}...", fixed.len(), output);
    write_accessory_csv(&sheet.headers, &fixed, output)?;
    report.output = Some(output.to_path_buf());
    info!(
        "Done: {} of {} rows changed",
        report.rows_changed, report.rows
    );

    Ok(report)
}
