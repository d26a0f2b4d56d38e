use crate::models::AccessoryRow;

const MOXOM: &str = "MOXOM";
const MODEL_MARKER: &str = "MX-";
const HOLDER_MARKER: &str = "MX-VS";
const HOLDER_CATEGORY: &str = "holder";

/// Fill brand, model and category for MOXOM accessories
///
/// Only fires when the description mentions MOXOM (any case):
/// - empty or "china" brand becomes "MOXOM"
/// - empty model takes the first description token containing "MX-"
/// - "MX-VS" parts are phone holders when no category is set
pub fn apply_moxom_rule(row: &mut AccessoryRow) -> bool {
    if !row.description.to_uppercase().contains(MOXOM) {
        return false;
    }

    let mut changed = false;

    if row.brand.is_empty() || row.brand.to_lowercase() == "china" {
        changed |= row.brand != MOXOM;
        row.brand = MOXOM.to_string();
    }

    if row.model.is_empty() {
        if let Some(token) = row
            .description
            .split_whitespace()
            .find(|token| token.contains(MODEL_MARKER))
        {
            row.model = token.to_string();
            changed = true;
        }
    }

    if row.description.contains(HOLDER_MARKER) && row.category.is_empty() {
        row.category = HOLDER_CATEGORY.to_string();
        changed = true;
    }

    changed
}
