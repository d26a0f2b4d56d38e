use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::debug;

/// Sheet read by column position; the header row is kept separately
#[derive(Debug, Clone, Default)]
pub struct PositionalSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Sheet read by column name, preserving header order
#[derive(Debug, Clone, Default)]
pub struct NamedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<IndexMap<String, String>>,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader)
}

/// Read a CSV file as positional rows
pub fn read_positional_csv(path: &Path) -> Result<PositionalSheet> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {:?}", path))?;
    parse_positional_csv(file).with_context(|| format!("Failed to read CSV: {:?}", path))
}

/// Parse CSV data as positional rows. Rows may have any number of cells.
pub fn parse_positional_csv<R: Read>(reader: R) -> Result<PositionalSheet> {
    let mut reader = csv_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read header row")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Malformed record at row {}", index + 1))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(PositionalSheet { headers, rows })
}

/// Read a CSV file as header-keyed rows
pub fn read_named_csv(path: &Path) -> Result<NamedSheet> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {:?}", path))?;
    parse_named_csv(file).with_context(|| format!("Failed to read CSV: {:?}", path))
}

/// Parse CSV data as header-keyed rows.
///
/// Short rows leave the trailing columns empty; cells past the last header
/// are dropped.
pub fn parse_named_csv<R: Read>(reader: R) -> Result<NamedSheet> {
    let PositionalSheet { headers, rows } = parse_positional_csv(reader)?;

    let rows: Vec<IndexMap<String, String>> = rows
        .into_iter()
        .enumerate()
        .map(|(index, cells)| {
            if cells.len() > headers.len() {
                debug!(
                    "Row {} has {} cells for {} columns, dropping the extras",
                    index + 1,
                    cells.len(),
                    headers.len()
                );
            }
            let mut cells = cells.into_iter();
            headers
                .iter()
                .map(|header| (header.clone(), cells.next().unwrap_or_default()))
                .collect()
        })
        .collect();

    Ok(NamedSheet { headers, rows })
}
