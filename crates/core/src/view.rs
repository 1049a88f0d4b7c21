//! Sort, filter, and selection view state for the catalog grid.
//!
//! View state is ephemeral: it is never persisted and resets to defaults
//! when the process restarts. Only the cart survives a restart.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::catalog::Print;

/// Sort order for the catalog grid.
///
/// Deserializes from the kebab-case form used in query parameters
/// (`sort=price-asc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Title A-Z. The default order.
    #[default]
    TitleAsc,
    /// Title Z-A.
    TitleDesc,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
}

impl SortKey {
    /// The query-parameter form of this sort key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }

    /// Compare two prints under this sort key.
    ///
    /// Title comparison is case-insensitive. Equal prints compare equal,
    /// so a stable sort preserves catalog order between them.
    #[must_use]
    pub fn compare(&self, a: &Print, b: &Print) -> Ordering {
        match self {
            Self::TitleAsc => compare_titles(a, b),
            Self::TitleDesc => compare_titles(b, a),
            Self::PriceAsc => a.price.cmp(&b.price),
            Self::PriceDesc => b.price.cmp(&a.price),
        }
    }
}

fn compare_titles(a: &Print, b: &Print) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

/// Category filter for the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every print.
    #[default]
    All,
    /// Show only prints in the named category.
    Only(String),
}

impl CategoryFilter {
    /// Parse the query-parameter form: `"all"` selects every category.
    #[must_use]
    pub fn from_param(param: &str) -> Self {
        if param.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(param.to_string())
        }
    }

    /// The query-parameter form of this filter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(category) => category,
        }
    }

    /// Whether a print passes this filter.
    #[must_use]
    pub fn matches(&self, print: &Print) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => print.category == *category,
        }
    }
}

/// Ephemeral UI state: current sort, filter, and overlay selection.
///
/// `selected` is an index into the *currently visible* list, not the
/// catalog; it is cleared whenever the overlay closes.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Current sort order.
    pub sort: SortKey,
    /// Current category filter.
    pub filter: CategoryFilter,
    /// Index of the print shown in the quick-view overlay, if open.
    pub selected: Option<usize>,
}

/// Filter then sort the catalog for display.
///
/// Filtering keeps catalog order; sorting is stable, so prints that
/// compare equal under the sort key stay in catalog order.
#[must_use]
pub fn list_visible<'a>(
    prints: &'a [Print],
    filter: &CategoryFilter,
    sort: SortKey,
) -> Vec<&'a Print> {
    let mut visible: Vec<&Print> = prints.iter().filter(|p| filter.matches(p)).collect();
    visible.sort_by(|a, b| sort.compare(a, b));
    visible
}

#[cfg(test)]
mod tests {
    use crate::catalog::tests::{print, sample_catalog};

    use super::*;

    fn titles<'a>(visible: &[&'a Print]) -> Vec<&'a str> {
        visible.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_price_asc_orders_numerically() {
        let prints = vec![print(1, "B", 500, "native"), print(2, "A", 1000, "native")];
        let visible = list_visible(&prints, &CategoryFilter::All, SortKey::PriceAsc);
        assert_eq!(titles(&visible), vec!["B", "A"]);
    }

    #[test]
    fn test_title_asc_orders_lexicographically() {
        let prints = vec![print(1, "B", 500, "native"), print(2, "A", 1000, "native")];
        let visible = list_visible(&prints, &CategoryFilter::All, SortKey::TitleAsc);
        assert_eq!(titles(&visible), vec!["A", "B"]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let prints = vec![
            print(1, "kea portrait", 500, "native"),
            print(2, "Bellbird", 500, "native"),
        ];
        let visible = list_visible(&prints, &CategoryFilter::All, SortKey::TitleAsc);
        assert_eq!(titles(&visible), vec!["Bellbird", "kea portrait"]);
    }

    #[test]
    fn test_equal_prices_keep_catalog_order() {
        let catalog = sample_catalog();
        let visible = list_visible(catalog.prints(), &CategoryFilter::All, SortKey::PriceAsc);
        // 1 and 4 share a price; catalog order between them must survive.
        assert_eq!(
            titles(&visible),
            vec![
                "Eastern Rosella",
                "Tui at Dawn",
                "Pīwakawaka",
                "Kererū in Flight"
            ]
        );
    }

    #[test]
    fn test_filter_keeps_only_matching_category_in_order() {
        let catalog = sample_catalog();
        let filter = CategoryFilter::from_param("native");
        let visible = list_visible(catalog.prints(), &filter, SortKey::PriceAsc);
        assert!(visible.iter().all(|p| p.category == "native"));
        // Equal-price natives stay in catalog order.
        assert_eq!(
            titles(&visible),
            vec!["Tui at Dawn", "Pīwakawaka", "Kererū in Flight"]
        );
    }

    #[test]
    fn test_filter_all_param_is_case_insensitive() {
        assert_eq!(CategoryFilter::from_param("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_param("native"),
            CategoryFilter::Only("native".to_string())
        );
    }

    #[test]
    fn test_sort_key_query_forms_round_trip() {
        for key in [
            SortKey::TitleAsc,
            SortKey::TitleDesc,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
        ] {
            let parsed: SortKey =
                serde_json::from_str(&format!("\"{}\"", key.as_str())).expect("parse");
            assert_eq!(parsed, key);
        }
    }
}
