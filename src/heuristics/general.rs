use crate::models::AccessoryRow;

/// Trim surrounding whitespace from every column
pub fn trim_fields(row: &mut AccessoryRow) -> bool {
    let mut changed = false;
    for value in row.fields_mut() {
        let trimmed = value.trim();
        if trimmed.len() != value.len() {
            *value = trimmed.to_string();
            changed = true;
        }
    }
    changed
}

/// Last resort: an accessory with no model is named by its description
pub fn description_fallback(row: &mut AccessoryRow) -> bool {
    if !row.model.is_empty() || row.description.is_empty() {
        return false;
    }
    row.model = row.description.clone();
    true
}
