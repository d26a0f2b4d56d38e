//! Field-level parsers shared by the phone pipelines

/// Parse a vendor price cell into a number.
///
/// Currency symbols and surrounding whitespace are stripped. Anything that
/// does not parse to a finite number yields 0.0 so a bad cell never aborts
/// a run.
pub fn parse_price(raw: &str) -> f64 {
    let cleaned = raw.replace('$', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Split a cell holding whitespace-separated serials/IMEIs
pub fn extract_identifiers(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Join `Key: value` fragments with ", ", skipping empty values
pub fn join_description(fragments: &[(&str, &str)]) -> String {
    fragments
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect::<Vec<_>>()
        .join(", ")
}
