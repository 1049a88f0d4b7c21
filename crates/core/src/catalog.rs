//! The read-only print catalog.
//!
//! Prints are loaded once at startup from a static catalog file and never
//! created or destroyed at runtime. The catalog's order is the tie-break
//! order for every sort the view applies.

use serde::{Deserialize, Serialize};

use crate::types::{Price, PrintId};

/// A purchasable photographic print.
///
/// Field names serialize in camelCase (`imageRef`) to match the catalog
/// file and the persisted cart layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Print {
    /// Catalog-unique identifier.
    pub id: PrintId,
    /// Display title, e.g. "Tui at Dawn".
    pub title: String,
    /// Price per copy.
    pub price: Price,
    /// Category slug used by the view filter, e.g. "native".
    pub category: String,
    /// Path or URL of the print image.
    pub image_ref: String,
}

/// The full, ordered set of prints for sale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    prints: Vec<Print>,
}

impl Catalog {
    /// Build a catalog from an ordered list of prints.
    #[must_use]
    pub const fn new(prints: Vec<Print>) -> Self {
        Self { prints }
    }

    /// All prints in catalog order.
    #[must_use]
    pub fn prints(&self) -> &[Print] {
        &self.prints
    }

    /// Look up a print by id.
    #[must_use]
    pub fn get(&self, id: PrintId) -> Option<&Print> {
        self.prints.iter().find(|print| print.id == id)
    }

    /// Distinct categories in first-seen order, for the filter control.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for print in &self.prints {
            if !seen.contains(&print.category.as_str()) {
                seen.push(print.category.as_str());
            }
        }
        seen
    }

    /// Number of prints in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prints.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prints.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rust_decimal::Decimal;

    use super::*;

    /// A small catalog used across the core test modules.
    pub(crate) fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            print(1, "Tui at Dawn", 1250, "native"),
            print(2, "Kererū in Flight", 1800, "native"),
            print(3, "Eastern Rosella", 950, "exotic"),
            print(4, "Pīwakawaka", 1250, "native"),
        ])
    }

    pub(crate) fn print(id: i32, title: &str, cents: i64, category: &str) -> Print {
        Print {
            id: PrintId::new(id),
            title: title.to_string(),
            price: Price::new(Decimal::new(cents, 2)),
            category: category.to_string(),
            image_ref: format!("/static/images/prints/{id}.jpg"),
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.get(PrintId::new(2)).map(|p| p.title.as_str()),
            Some("Kererū in Flight")
        );
        assert!(catalog.get(PrintId::new(99)).is_none());
    }

    #[test]
    fn test_categories_distinct_in_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.categories(), vec!["native", "exotic"]);
    }

    #[test]
    fn test_deserializes_from_json_array() {
        let json = r#"[
            {"id": 1, "title": "Tui at Dawn", "price": "12.50",
             "category": "native", "imageRef": "/static/images/prints/1.jpg"}
        ]"#;
        let catalog: Catalog = serde_json::from_str(json).expect("deserialize");
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get(PrintId::new(1)).map(|p| p.price.to_string()),
            Some("$12.50".to_string())
        );
    }
}
