use super::Condition;

/// Positional column layout of one phone source sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLayout {
    pub brand: usize,
    pub model: usize,
    pub identifiers: usize,
    pub price: usize,
    /// Optional attributes in description order: (label, column)
    pub attributes: [(&'static str, usize); 2],
}

impl SourceLayout {
    /// Number of cells a row needs to be usable
    pub fn width(&self) -> usize {
        [self.brand, self.model, self.identifiers, self.price]
            .into_iter()
            .chain(self.attributes.iter().map(|(_, col)| *col))
            .max()
            .map_or(0, |max| max + 1)
    }
}

/// The phone sheets the importer knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneSource {
    /// Brand, Model, IMEI, Specs, Color, Price
    NewStock,
    /// Brand, IMEI, Model, Battery, Storage, Price
    UsedStock,
}

impl PhoneSource {
    pub fn layout(&self) -> SourceLayout {
        match self {
            PhoneSource::NewStock => SourceLayout {
                brand: 0,
                model: 1,
                identifiers: 2,
                price: 5,
                attributes: [("Specs", 3), ("Color", 4)],
            },
            PhoneSource::UsedStock => SourceLayout {
                brand: 0,
                identifiers: 1,
                model: 2,
                price: 5,
                attributes: [("Storage", 4), ("Battery", 3)],
            },
        }
    }

    pub fn condition(&self) -> Condition {
        match self {
            PhoneSource::NewStock => Condition::New,
            PhoneSource::UsedStock => Condition::Used,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PhoneSource::NewStock => "new stock",
            PhoneSource::UsedStock => "used stock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_width() {
        assert_eq!(PhoneSource::NewStock.layout().width(), 6);
        assert_eq!(PhoneSource::UsedStock.layout().width(), 6);
    }

    #[test]
    fn test_used_stock_description_order() {
        let layout = PhoneSource::UsedStock.layout();
        assert_eq!(layout.attributes[0].0, "Storage");
        assert_eq!(layout.attributes[1].0, "Battery");
    }
}
