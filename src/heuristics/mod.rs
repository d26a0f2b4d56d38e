pub mod general;
pub mod green_lion;
pub mod moxom;

pub use general::*;
pub use green_lion::*;
pub use moxom::*;

use crate::models::AccessoryRow;

/// A single normalization rule for accessory rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessoryRule {
    /// Trim whitespace from every column
    TrimFields,
    /// Brand/model/category inference for MOXOM parts
    Moxom,
    /// Canonical "Green Lion" brand spelling
    GreenLionBrand,
    /// Model from description for Green Lion parts
    GreenLionModel,
    /// Model falls back to the description
    DescriptionFallback,
}

impl AccessoryRule {
    /// Apply the rule in place, returning whether the row changed
    pub fn apply(&self, row: &mut AccessoryRow) -> bool {
        match self {
            AccessoryRule::TrimFields => trim_fields(row),
            AccessoryRule::Moxom => apply_moxom_rule(row),
            AccessoryRule::GreenLionBrand => normalize_green_lion_brand(row),
            AccessoryRule::GreenLionModel => infer_green_lion_model(row),
            AccessoryRule::DescriptionFallback => description_fallback(row),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AccessoryRule::TrimFields => "trim_fields",
            AccessoryRule::Moxom => "moxom",
            AccessoryRule::GreenLionBrand => "green_lion_brand",
            AccessoryRule::GreenLionModel => "green_lion_model",
            AccessoryRule::DescriptionFallback => "description_fallback",
        }
    }
}

/// Ordered rule list. Later rules see (and may override) earlier results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub rules: Vec<AccessoryRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: vec![
                AccessoryRule::TrimFields,
                AccessoryRule::Moxom,
                AccessoryRule::GreenLionBrand,
                AccessoryRule::GreenLionModel,
                AccessoryRule::DescriptionFallback,
            ],
        }
    }
}

/// Result of running the rule set over one row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeuristicsResult {
    /// Rules that changed the row, in evaluation order
    pub fired: Vec<AccessoryRule>,
}

impl HeuristicsResult {
    pub fn changed(&self) -> bool {
        !self.fired.is_empty()
    }
}

/// Apply every rule in order to a single row
pub fn apply_rules(row: &mut AccessoryRow, rule_set: &RuleSet) -> HeuristicsResult {
    let fired = rule_set
        .rules
        .iter()
        .copied()
        .filter(|rule| rule.apply(row))
        .collect();

    HeuristicsResult { fired }
}
