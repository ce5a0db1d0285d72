//! # Cart Commands
//!
//! Commands behind the quantity pickers and the cart summary.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   qty / inc   ┌──────────┐   qty 0 / dec   ┌──────────┐  │
//! │  │  Empty   │──────────────►│ In Cart  │────────────────►│  Empty   │  │
//! │  │  Cart    │               │          │  (last line)    │  Cart    │  │
//! │  └──────────┘               └──────────┘                 └──────────┘  │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                    "Place order" enabled (no-op)                        │
//! │                                                                         │
//! │  The cart is never stored: it is aggregated from the pickers each time.│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{CartItem, CartSummary, ProductId, QuantityEntry, RawQuantity};
use tracing::debug;

use crate::commands::product::ProductView;
use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, LoadingState, SessionState};

/// One cart line with display strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub is_prescription: bool,
    pub quantity: u8,
    pub price_minor: i64,
    pub price_display: String,
    pub subtotal_minor: i64,
    pub subtotal_display: String,
}

impl CartLineView {
    fn build(item: &CartItem, config: &ConfigState) -> Self {
        CartLineView {
            id: item.id().get(),
            name: item.product.name.clone(),
            category: item.product.category.clone(),
            is_prescription: item.product.is_prescription,
            quantity: item.quantity,
            price_minor: item.product.price_minor,
            price_display: config.format_currency(item.product.price_minor),
            subtotal_minor: item.subtotal_minor,
            subtotal_display: config.format_currency(item.subtotal_minor),
        }
    }
}

/// Cart summary panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    /// While true, the summary should render placeholders
    pub is_loading: bool,
    pub items: Vec<CartLineView>,
    pub line_count: usize,
    pub total_items: u32,
    pub grand_total_minor: i64,
    pub grand_total_display: String,
    /// "Place order" button state; the button itself does nothing
    pub can_place_order: bool,
}

impl CartResponse {
    pub fn build(cart: &CartSummary, is_loading: bool, config: &ConfigState) -> Self {
        CartResponse {
            is_loading,
            items: cart
                .items
                .iter()
                .map(|item| CartLineView::build(item, config))
                .collect(),
            line_count: cart.line_count(),
            total_items: cart.total_items(),
            grand_total_minor: cart.grand_total_minor,
            grand_total_display: config.format_currency(cart.grand_total_minor),
            can_place_order: !is_loading && !cart.is_empty(),
        }
    }
}

/// Result of a picker change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityChangeResponse {
    /// False for a boundary no-op or while loading
    pub changed: bool,
    /// The stored value after the change
    pub entry: QuantityEntry,
    pub product: ProductView,
    pub cart: CartResponse,
}

/// Current cart.
pub fn get_cart(
    catalog: &CatalogState,
    session: &SessionState,
    loading: &LoadingState,
    config: &ConfigState,
) -> CartResponse {
    debug!("get_cart command");
    let is_loading = loading.is_loading();
    session.with_session(|s| CartResponse::build(&s.cart(catalog.inner()), is_loading, config))
}

/// Sets a picker from free-form input.
///
/// The input is normalized, never rejected: `""` clears the picker,
/// anything else becomes an integer clamped to 0..=99.
///
/// ## Errors
/// `NOT_FOUND` if the product is not in the catalog.
pub fn change_quantity(
    catalog: &CatalogState,
    session: &SessionState,
    loading: &LoadingState,
    config: &ConfigState,
    product_id: u32,
    value: RawQuantity,
) -> Result<QuantityChangeResponse, ApiError> {
    debug!(product_id, value = ?value, "change_quantity command");
    let id = ProductId::new(product_id);
    apply(catalog, session, loading, config, id, |quantities| {
        let before = quantities.get(id);
        let after = quantities.set(id, value);
        before != Some(after)
    })
}

/// `+` on a picker. No-op at 99.
///
/// ## Errors
/// `NOT_FOUND` if the product is not in the catalog.
pub fn increment_quantity(
    catalog: &CatalogState,
    session: &SessionState,
    loading: &LoadingState,
    config: &ConfigState,
    product_id: u32,
) -> Result<QuantityChangeResponse, ApiError> {
    debug!(product_id, "increment_quantity command");
    let id = ProductId::new(product_id);
    apply(catalog, session, loading, config, id, |quantities| {
        quantities.increment(id)
    })
}

/// `-` on a picker. No-op at 0 or when the picker is cleared.
///
/// ## Errors
/// `NOT_FOUND` if the product is not in the catalog.
pub fn decrement_quantity(
    catalog: &CatalogState,
    session: &SessionState,
    loading: &LoadingState,
    config: &ConfigState,
    product_id: u32,
) -> Result<QuantityChangeResponse, ApiError> {
    debug!(product_id, "decrement_quantity command");
    let id = ProductId::new(product_id);
    apply(catalog, session, loading, config, id, |quantities| {
        quantities.decrement(id)
    })
}

/// Runs one picker mutation and rebuilds the row and the cart under the
/// same lock.
///
/// Pickers are disabled while loading: the mutation is skipped and the
/// response reports `changed: false` with the stored value.
fn apply<F>(
    catalog: &CatalogState,
    session: &SessionState,
    loading: &LoadingState,
    config: &ConfigState,
    id: ProductId,
    mutate: F,
) -> Result<QuantityChangeResponse, ApiError>
where
    F: FnOnce(&mut storefront_core::QuantityStore) -> bool,
{
    let product = catalog.inner().require(id)?;
    let is_loading = loading.is_loading();

    Ok(session.with_session_mut(|s| {
        let changed = if is_loading {
            debug!(product_id = id.get(), "Quantity change ignored while loading");
            false
        } else {
            mutate(&mut s.quantities)
        };
        let entry = s.quantities.get(id).unwrap_or(QuantityEntry::Value(0));
        if changed {
            debug!(product_id = id.get(), entry = %entry.display(), "Quantity updated");
        }

        QuantityChangeResponse {
            changed,
            entry,
            product: ProductView::build(product, &s.quantities, is_loading, config),
            cart: CartResponse::build(&s.cart(catalog.inner()), is_loading, config),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::time::Duration;

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

    impl Fixture {
        fn set(&self, id: u32, value: impl Into<RawQuantity>) -> QuantityChangeResponse {
            change_quantity(
                &self.catalog,
                &self.session,
                &self.loading,
                &self.config,
                id,
                value.into(),
            )
            .unwrap()
        }

        fn inc(&self, id: u32) -> QuantityChangeResponse {
            increment_quantity(&self.catalog, &self.session, &self.loading, &self.config, id)
                .unwrap()
        }

        fn dec(&self, id: u32) -> QuantityChangeResponse {
            decrement_quantity(&self.catalog, &self.session, &self.loading, &self.config, id)
                .unwrap()
        }

        fn cart(&self) -> CartResponse {
            get_cart(&self.catalog, &self.session, &self.loading, &self.config)
        }
    }

    #[test]
    fn test_empty_cart() {
        let f = fixture();
        let cart = f.cart();
        assert!(cart.items.is_empty());
        assert_eq!(cart.grand_total_minor, 0);
        assert_eq!(cart.grand_total_display, "Rp 0");
        assert!(!cart.can_place_order);
    }

    #[test]
    fn test_mixed_entries() {
        let f = fixture();
        f.set(1, 2_i64);
        f.set(3, 0_i64);
        f.set(4, "");

        let cart = f.cart();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].id, 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.items[0].subtotal_minor, 30_000);
        assert_eq!(cart.items[0].subtotal_display, "Rp 30.000");
        assert_eq!(cart.grand_total_minor, 30_000);
        assert_eq!(cart.total_items, 2);
        assert!(cart.can_place_order);
    }

    #[test]
    fn test_text_input_is_clamped() {
        let f = fixture();
        assert_eq!(f.set(2, "150").entry, QuantityEntry::Value(99));
        assert_eq!(f.set(2, "-5").entry, QuantityEntry::Value(0));
        assert_eq!(f.set(2, "abc").entry, QuantityEntry::Value(0));
        assert_eq!(f.set(2, "").entry, QuantityEntry::Unset);
    }

    #[test]
    fn test_repeated_set_is_idempotent() {
        let f = fixture();
        let first = f.set(1, "3");
        let second = f.set(1, "3");
        assert!(first.changed);
        assert!(!second.changed);
        assert_eq!(first.cart.grand_total_minor, second.cart.grand_total_minor);
    }

    #[test]
    fn test_increment_raises_total_by_price() {
        let f = fixture();
        f.set(1, 4_i64);
        let before = f.cart().grand_total_minor;

        let resp = f.inc(2);
        assert!(resp.changed);
        assert_eq!(resp.cart.grand_total_minor - before, 45_000);
        assert_eq!(resp.product.quantity_display, "1");
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let f = fixture();
        f.set(1, 99_i64);
        let resp = f.inc(1);
        assert!(!resp.changed);
        assert_eq!(resp.entry, QuantityEntry::Value(99));
        assert!(!resp.product.can_increment);

        let resp = f.dec(3);
        assert!(!resp.changed);
        assert_eq!(resp.product.quantity_display, "0");

        f.set(3, "");
        let resp = f.dec(3);
        assert!(!resp.changed);
        assert_eq!(resp.entry, QuantityEntry::Unset);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let f = fixture();
        f.set(4, 1_i64);
        assert_eq!(f.cart().line_count, 1);

        let resp = f.dec(4);
        assert!(resp.changed);
        assert_eq!(resp.entry, QuantityEntry::Value(0));
        assert!(resp.cart.items.is_empty());
        assert!(!resp.cart.can_place_order);
    }

    #[test]
    fn test_unknown_product() {
        let f = fixture();
        let err = change_quantity(
            &f.catalog,
            &f.session,
            &f.loading,
            &f.config,
            42,
            RawQuantity::number(1),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = increment_quantity(&f.catalog, &f.session, &f.loading, &f.config, 42)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(f.session.with_session(|s| s.quantities.is_empty()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pickers_are_frozen_while_loading() {
        let f = fixture();
        f.set(1, 1_i64);
        f.loading.trigger();

        let resp = f.inc(1);
        assert!(!resp.changed);
        assert_eq!(resp.entry, QuantityEntry::Value(1));
        assert_eq!(resp.cart.grand_total_minor, 15_000);

        let resp = f.set(2, "5");
        assert!(!resp.changed);
        assert_eq!(resp.product.quantity_display, "0");
        assert!(!resp.product.editable);
        assert_eq!(resp.cart.grand_total_minor, 15_000);

        let resp = f.dec(1);
        assert!(!resp.changed);
        assert_eq!(f.cart().total_items, 1);

        tokio::time::sleep(Duration::from_millis(801)).await;
        let resp = f.inc(1);
        assert!(resp.changed);
        assert_eq!(resp.cart.grand_total_minor, 30_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cart_while_loading() {
        let f = fixture();
        f.set(1, 1_i64);
        f.loading.trigger();

        let cart = f.cart();
        assert!(cart.is_loading);
        assert_eq!(cart.line_count, 1);
        assert!(!cart.can_place_order);
    }

    #[test]
    fn test_response_wire_shape() {
        let f = fixture();
        let resp = f.set(1, "");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["entry"], "");
        assert_eq!(value["product"]["quantity"], "");
        assert_eq!(value["cart"]["grandTotalMinor"], 0);
        assert_eq!(value["cart"]["canPlaceOrder"], false);
    }
}
