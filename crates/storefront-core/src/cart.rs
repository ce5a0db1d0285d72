//! # Cart Aggregator
//!
//! Derives the cart from the catalog and the quantity pickers. The cart is
//! never stored: it is recomputed in full whenever a picker changes.
//!
//! ## Aggregation Flow
//! ```text
//! Catalog ──► for each product, in order
//!               │
//!               ▼
//!         quantities.resolved(id)   (Unset / missing → 0)
//!               │
//!               ├── 0  ──► skipped
//!               │
//!               └── n > 0 ──► CartItem { quantity: n, subtotal: n × price }
//!                                 │
//!                                 ▼
//!               CartSummary { items, grand_total = Σ subtotal,
//!                                    total_items = Σ quantity }
//! ```

use crate::catalog::Catalog;
use crate::quantity::QuantityStore;
use crate::types::{CartItem, CartSummary};

/// Builds the cart summary.
///
/// Entries in `quantities` for ids that are not in the catalog are ignored.
///
/// ## Example
/// ```rust
/// use storefront_core::{cart::aggregate, Catalog, ProductId, QuantityStore, RawQuantity};
///
/// let catalog = Catalog::sample();
/// let mut quantities = QuantityStore::new();
/// quantities.set(ProductId::new(1), RawQuantity::number(2));
/// quantities.set(ProductId::new(3), RawQuantity::number(0));
/// quantities.set(ProductId::new(4), RawQuantity::empty());
///
/// let summary = aggregate(&catalog, &quantities);
/// assert_eq!(summary.items.len(), 1);
/// assert_eq!(summary.items[0].subtotal_minor, 30_000);
/// assert_eq!(summary.grand_total().minor(), 30_000);
/// assert_eq!(summary.total_items(), 2);
/// ```
pub fn aggregate(catalog: &Catalog, quantities: &QuantityStore) -> CartSummary {
    let items = catalog
        .iter()
        .filter_map(|product| CartItem::from_product(product, quantities.resolved(product.id)))
        .collect();

    CartSummary::from_items(items)
}
