//! # Product Commands
//!
//! Commands behind the search box, the category selector and the product
//! list.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  Shopper types "vit"                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_search("vit") ──► session.search = "vit"                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter_products(catalog, "vit", category)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductListResponse { resultCount: 1, products: [Vitamin C …] }        │
//! │                                                                         │
//! │  Every row carries its picker state, so the list renders on its own.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::filter::filter_categories;
use storefront_core::{CategoryFilter, Product, QuantityEntry, QuantityStore};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, LoadingState, Session, SessionState};

/// One row of the product list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: u32,
    pub name: String,
    pub price_minor: i64,
    pub price_display: String,
    pub category: String,
    pub is_prescription: bool,
    /// Stored picker value (`""` when cleared, absent when never touched)
    pub quantity: Option<QuantityEntry>,
    /// Text the picker's field shows
    pub quantity_display: String,
    /// Picker field accepts input
    pub editable: bool,
    /// `+` is enabled
    pub can_increment: bool,
    /// `-` is enabled
    pub can_decrement: bool,
}

impl ProductView {
    pub fn build(
        product: &Product,
        quantities: &QuantityStore,
        is_loading: bool,
        config: &ConfigState,
    ) -> Self {
        let id = product.id;
        ProductView {
            id: id.get(),
            name: product.name.clone(),
            price_minor: product.price_minor,
            price_display: config.format_currency(product.price_minor),
            category: product.category.clone(),
            is_prescription: product.is_prescription,
            quantity: quantities.get(id),
            quantity_display: quantities.display(id),
            editable: !is_loading,
            can_increment: !is_loading && quantities.can_increment(id),
            can_decrement: !is_loading && quantities.can_decrement(id),
        }
    }
}

/// The filtered product list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    /// While true, the list should render placeholders
    pub is_loading: bool,
    pub search: String,
    pub category: CategoryFilter,
    pub category_label: String,
    pub result_count: usize,
    pub products: Vec<ProductView>,
}

impl ProductListResponse {
    pub fn build(
        catalog: &CatalogState,
        session: &Session,
        is_loading: bool,
        config: &ConfigState,
    ) -> Self {
        let products: Vec<ProductView> = session
            .visible_products(catalog.inner())
            .into_iter()
            .map(|p| ProductView::build(p, &session.quantities, is_loading, config))
            .collect();

        ProductListResponse {
            is_loading,
            search: session.search.clone(),
            category: session.category.clone(),
            category_label: session.category.label().to_string(),
            result_count: products.len(),
            products,
        }
    }
}

/// One selector option.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    pub value: CategoryFilter,
    pub label: String,
    pub is_selected: bool,
}

/// The category selector's options, filtered by its own search box.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListResponse {
    pub selected: CategoryFilter,
    pub selected_label: String,
    pub query: String,
    /// Empty when nothing matches ("No categories found")
    pub options: Vec<CategoryOption>,
}

/// Current product list.
pub fn search_products(
    catalog: &CatalogState,
    session: &SessionState,
    loading: &LoadingState,
    config: &ConfigState,
) -> ProductListResponse {
    debug!("search_products command");
    let is_loading = loading.is_loading();
    session.with_session(|s| ProductListResponse::build(catalog, s, is_loading, config))
}

/// Replaces the search box text.
///
/// The text is stored as typed; trimming and case folding happen when
/// filtering.
pub fn set_search(
    catalog: &CatalogState,
    session: &SessionState,
    loading: &LoadingState,
    config: &ConfigState,
    search: String,
) -> ProductListResponse {
    debug!(search = %search, "set_search command");
    let is_loading = loading.is_loading();
    session.with_session_mut(|s| {
        s.search = search;
        ProductListResponse::build(catalog, s, is_loading, config)
    })
}

/// Selects a category (`"all"` for every category).
///
/// ## Errors
/// `NOT_FOUND` if the category is not one of the selector's options.
pub fn set_category(
    catalog: &CatalogState,
    session: &SessionState,
    loading: &LoadingState,
    config: &ConfigState,
    category: String,
) -> Result<ProductListResponse, ApiError> {
    debug!(category = %category, "set_category command");
    let category = CategoryFilter::from(category);
    catalog.inner().require_category(&category)?;

    let is_loading = loading.is_loading();
    Ok(session.with_session_mut(|s| {
        s.category = category;
        ProductListResponse::build(catalog, s, is_loading, config)
    }))
}

/// Selector options whose label contains `query` (case-insensitive).
pub fn list_categories(
    catalog: &CatalogState,
    session: &SessionState,
    query: Option<String>,
) -> CategoryListResponse {
    let query = query.unwrap_or_default();
    debug!(query = %query, "list_categories command");

    let selected = session.with_session(|s| s.category.clone());
    let options = filter_categories(&catalog.inner().categories(), &query)
        .into_iter()
        .map(|value| CategoryOption {
            label: value.label().to_string(),
            is_selected: value == selected,
            value,
        })
        .collect();

    CategoryListResponse {
        selected_label: selected.label().to_string(),
        selected,
        query,
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::time::Duration;
    use storefront_core::{ProductId, RawQuantity};

    struct Fixture {
        catalog: CatalogState,
        session: SessionState,
        loading: LoadingState,
        config: ConfigState,
    }

    fn fixture() -> Fixture {
        Fixture {
            catalog: CatalogState::default(),
            session: SessionState::new(),
            loading: LoadingState::new(Duration::from_millis(800)),
            config: ConfigState::default(),
        }
    }

    fn names(resp: &ProductListResponse) -> Vec<&str> {
        resp.products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_initial_list_is_full_catalog() {
        let f = fixture();
        let resp = search_products(&f.catalog, &f.session, &f.loading, &f.config);

        assert!(!resp.is_loading);
        assert_eq!(resp.result_count, 4);
        assert_eq!(
            names(&resp),
            vec![
                "Paracetamol 500mg",
                "Amoxicillin 500mg",
                "Vitamin C 1000mg",
                "Cetirizine 10mg"
            ]
        );
        assert_eq!(resp.category_label, "All categories");
    }

    #[test]
    fn test_set_search_filters() {
        let f = fixture();
        let resp = set_search(&f.catalog, &f.session, &f.loading, &f.config, " Vitamin ".to_string());
        assert_eq!(names(&resp), vec!["Vitamin C 1000mg"]);
        assert_eq!(resp.search, " Vitamin ");
        assert_eq!(resp.products[0].price_display, "Rp 30.000");
    }

    #[test]
    fn test_set_category() {
        let f = fixture();
        let resp =
            set_category(&f.catalog, &f.session, &f.loading, &f.config, "Antibiotic".to_string())
                .unwrap();
        assert_eq!(names(&resp), vec!["Amoxicillin 500mg"]);
        assert!(resp.products[0].is_prescription);

        let resp = set_category(&f.catalog, &f.session, &f.loading, &f.config, "all".to_string())
            .unwrap();
        assert_eq!(resp.result_count, 4);
    }

    #[test]
    fn test_set_unknown_category_is_rejected() {
        let f = fixture();
        let err = set_category(&f.catalog, &f.session, &f.loading, &f.config, "Vaccines".to_string())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        // Selection is unchanged.
        let resp = search_products(&f.catalog, &f.session, &f.loading, &f.config);
        assert!(resp.category.is_all());
    }

    #[test]
    fn test_picker_state_in_rows() {
        let f = fixture();
        f.session.with_session_mut(|s| {
            s.quantities.set(ProductId::new(1), RawQuantity::number(99));
            s.quantities.set(ProductId::new(2), RawQuantity::empty());
        });

        let resp = search_products(&f.catalog, &f.session, &f.loading, &f.config);
        let row = |id: u32| resp.products.iter().find(|p| p.id == id).unwrap();

        assert_eq!(row(1).quantity_display, "99");
        assert!(!row(1).can_increment);
        assert!(row(1).can_decrement);

        assert_eq!(row(2).quantity, Some(QuantityEntry::Unset));
        assert_eq!(row(2).quantity_display, "");
        assert!(row(2).can_increment);
        assert!(!row(2).can_decrement);

        assert_eq!(row(3).quantity, None);
        assert_eq!(row(3).quantity_display, "0");
    }

    #[tokio::test(start_paused = true)]
    async fn test_controls_disabled_while_loading() {
        let f = fixture();
        f.loading.trigger();

        let resp = search_products(&f.catalog, &f.session, &f.loading, &f.config);
        assert!(resp.is_loading);
        assert_eq!(resp.result_count, 4);
        assert!(resp
            .products
            .iter()
            .all(|p| !p.editable && !p.can_increment && !p.can_decrement));
    }

    #[test]
    fn test_list_categories() {
        let f = fixture();
        let resp = list_categories(&f.catalog, &f.session, None);
        let labels: Vec<&str> = resp.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["All categories", "Pain Relief", "Antibiotic", "Supplement", "Allergy"]
        );
        assert!(resp.options[0].is_selected);
        assert_eq!(resp.selected_label, "All categories");

        let resp = list_categories(&f.catalog, &f.session, Some("all".to_string()));
        let labels: Vec<&str> = resp.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["All categories", "Allergy"]);

        let resp = list_categories(&f.catalog, &f.session, Some("zzz".to_string()));
        assert!(resp.options.is_empty());
    }

    #[test]
    fn test_list_categories_marks_selection() {
        let f = fixture();
        set_category(&f.catalog, &f.session, &f.loading, &f.config, "Allergy".to_string()).unwrap();

        let resp = list_categories(&f.catalog, &f.session, None);
        let selected: Vec<&str> = resp
            .options
            .iter()
            .filter(|o| o.is_selected)
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(selected, vec!["Allergy"]);
        assert_eq!(resp.selected_label, "Allergy");
    }

    #[test]
    fn test_response_wire_shape() {
        let f = fixture();
        let resp = search_products(&f.catalog, &f.session, &f.loading, &f.config);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["category"], "all");
        assert_eq!(value["resultCount"], 4);
        assert_eq!(value["products"][0]["priceMinor"], 15_000);
        assert_eq!(value["products"][0]["isPrescription"], false);
    }
}
