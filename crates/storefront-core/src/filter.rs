//! # Filter Engine
//!
//! Computes which catalog rows are visible for the current search box and
//! category selector, and which selector options match the selector's own
//! search box.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  visible(product) =                                                     │
//! │      lower(product.name) contains lower(trim(search))                   │
//! │    AND (category == All  OR  product.category == category)              │
//! │                                                                         │
//! │  • The name match ignores case; the category match is exact            │
//! │  • An empty search term matches every name                              │
//! │  • Catalog order is kept (stable filter, no re-sorting)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::Catalog;
use crate::types::Product;
use crate::{ALL_CATEGORIES, ALL_CATEGORIES_LABEL};

// =============================================================================
// Category Filter
// =============================================================================

/// The category selector's value.
///
/// On the wire this is a plain string where `"all"` selects every category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl CategoryFilter {
    /// Parses the wire value. Only the exact string `"all"` means `All`.
    pub fn from_wire(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Exact(value.to_string())
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Exact(category) => category,
        }
    }

    /// Text shown in the selector.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Exact(category) => category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(category) => product.category == *category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::from_wire(&value)
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        CategoryFilter::from_wire(value)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Exact(category) => category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

// =============================================================================
// Product Search
// =============================================================================

/// Whether `name` contains `term`, ignoring case.
///
/// `term` is expected to be trimmed and lowercased already.
fn name_matches(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(term)
}

/// Visible products for a search term and category, in catalog order.
///
/// ## Example
/// ```rust
/// use storefront_core::{filter::filter_products, Catalog, CategoryFilter};
///
/// let catalog = Catalog::sample();
/// let hits = filter_products(&catalog, "  VITAMIN ", &CategoryFilter::All);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Vitamin C 1000mg");
/// ```
pub fn filter_products<'a>(
    catalog: &'a Catalog,
    search: &str,
    category: &CategoryFilter,
) -> Vec<&'a Product> {
    let term = search.trim().to_lowercase();
    catalog
        .iter()
        .filter(|p| name_matches(&p.name, &term) && category.matches(p))
        .collect()
}

// =============================================================================
// Category Search
// =============================================================================

/// Selector options whose label contains `query`, ignoring case.
///
/// `All` is matched against its label, so `"cat"` finds "All categories".
/// A blank query returns every option.
pub fn filter_categories(options: &[CategoryFilter], query: &str) -> Vec<CategoryFilter> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return options.to_vec();
    }

    options
        .iter()
        .filter(|option| option.label().to_lowercase().contains(&term))
        .cloned()
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_empty_search_all_returns_catalog_in_order() {
        let catalog = Catalog::sample();
        let hits = filter_products(&catalog, "", &CategoryFilter::All);
        let expected: Vec<&Product> = catalog.iter().collect();
        assert_eq!(hits, expected);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::sample();
        for term in ["vitamin", "VITAMIN", "ViTaMiN", "  vitamin  "] {
            let hits = filter_products(&catalog, term, &CategoryFilter::All);
            assert_eq!(names(&hits), vec!["Vitamin C 1000mg".to_string()], "{term}");
        }
    }

    #[test]
    fn test_search_substring_keeps_order() {
        let catalog = Catalog::sample();
        let hits = filter_products(&catalog, "500mg", &CategoryFilter::All);
        assert_eq!(
            names(&hits),
            vec!["Paracetamol 500mg".to_string(), "Amoxicillin 500mg".to_string()]
        );
    }

    #[test]
    fn test_category_is_exact() {
        let catalog = Catalog::sample();

        let hits = filter_products(&catalog, "", &CategoryFilter::from("Antibiotic"));
        assert_eq!(names(&hits), vec!["Amoxicillin 500mg".to_string()]);

        let hits = filter_products(&catalog, "", &CategoryFilter::from("antibiotic"));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let catalog = Catalog::sample();
        let hits = filter_products(&catalog, "500", &CategoryFilter::from("Pain Relief"));
        assert_eq!(names(&hits), vec!["Paracetamol 500mg".to_string()]);

        let hits = filter_products(&catalog, "vitamin", &CategoryFilter::from("Allergy"));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_no_match() {
        let catalog = Catalog::sample();
        assert!(filter_products(&catalog, "insulin", &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_category_filter_wire() {
        assert_eq!(CategoryFilter::from_wire("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_wire("All"),
            CategoryFilter::Exact("All".to_string())
        );
        assert_eq!(CategoryFilter::from("all".to_string()), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("Allergy".to_string()),
            CategoryFilter::from_wire("Allergy")
        );
        assert_eq!(CategoryFilter::All.as_wire(), "all");
        assert_eq!(CategoryFilter::All.label(), "All categories");

        let json = serde_json::to_string(&CategoryFilter::from("Allergy")).unwrap();
        assert_eq!(json, "\"Allergy\"");
        let parsed: CategoryFilter = serde_json::from_str("\"all\"").unwrap();
        assert!(parsed.is_all());
    }

    #[test]
    fn test_filter_categories() {
        let options = Catalog::sample().categories();

        assert_eq!(filter_categories(&options, ""), options);
        assert_eq!(filter_categories(&options, "   "), options);

        assert_eq!(
            filter_categories(&options, "ALL"),
            vec![CategoryFilter::All, CategoryFilter::from("Allergy")]
        );
        assert_eq!(filter_categories(&options, "categ"), vec![CategoryFilter::All]);
        assert_eq!(
            filter_categories(&options, "supp"),
            vec![CategoryFilter::from("Supplement")]
        );
        assert!(filter_categories(&options, "xyz").is_empty());
    }
}
