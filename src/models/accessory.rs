use indexmap::IndexMap;

pub const BRAND_COLUMN: &str = "Brand";
pub const MODEL_COLUMN: &str = "Model";
pub const CATEGORY_COLUMN: &str = "Category";
pub const DESCRIPTION_COLUMN: &str = "Description";

/// A row of the accessory sheet.
///
/// The four columns the inference rules work on are typed fields; every
/// other column is carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessoryRow {
    pub brand: String,
    pub model: String,
    pub category: String,
    pub description: String,
    /// Remaining columns keyed by header name, in header order
    pub extra: IndexMap<String, String>,
}

impl AccessoryRow {
    /// Build a row from a header-keyed record. Missing columns read as empty.
    pub fn from_named(fields: IndexMap<String, String>) -> Self {
        let mut row = Self::default();
        for (column, value) in fields {
            match column.as_str() {
                BRAND_COLUMN => row.brand = value,
                MODEL_COLUMN => row.model = value,
                CATEGORY_COLUMN => row.category = value,
                DESCRIPTION_COLUMN => row.description = value,
                _ => {
                    row.extra.insert(column, value);
                }
            }
        }
        row
    }

    /// Value of a column by header name
    pub fn get(&self, column: &str) -> Option<&str> {
        match column {
            BRAND_COLUMN => Some(&self.brand),
            MODEL_COLUMN => Some(&self.model),
            CATEGORY_COLUMN => Some(&self.category),
            DESCRIPTION_COLUMN => Some(&self.description),
            _ => self.extra.get(column).map(String::as_str),
        }
    }

    /// Cells in the given header order. Columns outside the header are not emitted.
    pub fn to_record(&self, headers: &[String]) -> Vec<String> {
        headers
            .iter()
            .map(|h| self.get(h).unwrap_or_default().to_string())
            .collect()
    }

    /// Iterate over every field, typed columns first
    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut String> {
        [
            &mut self.brand,
            &mut self.model,
            &mut self.category,
            &mut self.description,
        ]
        .into_iter()
        .chain(self.extra.values_mut())
    }
}
