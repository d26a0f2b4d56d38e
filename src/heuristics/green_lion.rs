use crate::models::AccessoryRow;

pub const GREEN_LION: &str = "Green Lion";
const MODEL_PREFIX: &str = "GL ";

/// Collapse brand variants like "green lion cable" to "Green Lion"
pub fn normalize_green_lion_brand(row: &mut AccessoryRow) -> bool {
    if !row.brand.to_lowercase().contains("green lion") || row.brand == GREEN_LION {
        return false;
    }
    row.brand = GREEN_LION.to_string();
    true
}

/// Derive a Green Lion model from the description, dropping a leading "GL "
pub fn infer_green_lion_model(row: &mut AccessoryRow) -> bool {
    if row.brand != GREEN_LION || !row.model.is_empty() {
        return false;
    }

    row.model = match row.description.strip_prefix(MODEL_PREFIX) {
        Some(rest) => rest.trim().to_string(),
        None => row.description.clone(),
    };
    !row.model.is_empty()
}
