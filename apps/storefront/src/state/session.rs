//! # Session State
//!
//! Holds what the shopper has entered: the search text, the selected
//! category and the quantity pickers. Everything shown on screen (visible
//! products, cart lines, totals) is derived from this plus the catalog.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Shopper Action           Command                 Session Change        │
//! │  ──────────────           ───────                 ──────────────        │
//! │                                                                         │
//! │  Type in search ─────────► set_search() ────────► search = text        │
//! │                                                                         │
//! │  Pick category ──────────► set_category() ──────► category = value     │
//! │                                                                         │
//! │  Type quantity ──────────► change_quantity() ───► quantities[id] = n   │
//! │                                                                         │
//! │  Click + / - ────────────► increment/decrement ─► quantities[id] ± 1   │
//! │                                                                         │
//! │  NOTE: Derived views are recomputed in full after every change.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use storefront_core::cart::aggregate;
use storefront_core::filter::filter_products;
use storefront_core::{CartSummary, Catalog, CategoryFilter, Product, QuantityStore};

/// Shopper input for one storefront session.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Raw search box text (trimmed only when filtering)
    pub search: String,

    /// Selected category
    pub category: CategoryFilter,

    /// Per-product picker values
    pub quantities: QuantityStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Products visible for the current search and category.
    pub fn visible_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        filter_products(catalog, &self.search, &self.category)
    }

    /// Cart derived from the current pickers.
    pub fn cart(&self, catalog: &Catalog) -> CartSummary {
        aggregate(catalog, &self.quantities)
    }
}

/// Shared session state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>` so the driver and any background task can
/// share it. Every operation is quick and most of them write, so a plain
/// mutex is enough.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        // Every write leaves a whole Session behind, so a poisoned lock is still usable.
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let cart = session_state.with_session(|s| s.cart(catalog));
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.lock();
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.lock();
        f(&mut session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{ProductId, RawQuantity};

    #[test]
    fn test_new_session_shows_everything() {
        let catalog = Catalog::sample();
        let state = SessionState::new();

        let visible = state.with_session(|s| s.visible_products(&catalog).len());
        assert_eq!(visible, catalog.len());
        assert!(state.with_session(|s| s.cart(&catalog).is_empty()));
    }

    #[test]
    fn test_updates_are_visible_across_clones() {
        let catalog = Catalog::sample();
        let state = SessionState::new();
        let other = state.clone();

        state.with_session_mut(|s| {
            s.search = "vitamin".to_string();
            s.quantities.set(ProductId::new(3), RawQuantity::text("2"));
        });

        let names: Vec<String> = other.with_session(|s| {
            s.visible_products(&catalog)
                .iter()
                .map(|p| p.name.clone())
                .collect()
        });
        assert_eq!(names, vec!["Vitamin C 1000mg".to_string()]);
        assert_eq!(
            other.with_session(|s| s.cart(&catalog).grand_total().minor()),
            60_000
        );
    }

    #[test]
    fn test_cart_ignores_search_and_category() {
        let catalog = Catalog::sample();
        let state = SessionState::new();

        state.with_session_mut(|s| {
            s.quantities.set(ProductId::new(1), RawQuantity::number(1));
            s.search = "cetirizine".to_string();
            s.category = CategoryFilter::from("Allergy");
        });

        let cart = state.with_session(|s| s.cart(&catalog));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items[0].product.name, "Paracetamol 500mg");
    }
}
