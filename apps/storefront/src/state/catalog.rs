//! # Catalog State
//!
//! Wraps the product table for use in commands.
//!
//! ## Thread Safety
//! The catalog is immutable after startup, so it is shared through an `Arc`
//! with no locking. Commands only ever borrow it.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub fn search_products(catalog: &CatalogState, session: &SessionState, ...) {
//!     let visible = filter_products(catalog.inner(), &search, &category);
//! }
//! ```

use std::sync::Arc;

use storefront_core::Catalog;

/// Shared handle to the product table.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the inner Catalog.
    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for CatalogState {
    /// The built-in sample table.
    fn default() -> Self {
        CatalogState::new(Catalog::sample())
    }
}
