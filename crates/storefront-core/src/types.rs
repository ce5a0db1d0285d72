//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │  CartSummary    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │──►│  product (flat) │──►│  items          │       │
//! │  │  name           │   │  quantity       │   │  grand_total    │       │
//! │  │  price_minor    │   │  subtotal_minor │   │  total_items    │       │
//! │  │  category       │   └─────────────────┘   └─────────────────┘       │
//! │  │  is_prescription│                                                    │
//! │  └─────────────────┘    static ──────────► derived on every change      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Catalog-unique product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for ordering.
///
/// Products are defined once when the catalog is built and are never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name; the search box matches against it.
    pub name: String,

    /// Price in minor currency units.
    pub price_minor: i64,

    /// Category label, compared exactly by the category selector.
    pub category: String,

    /// Prescription-only medicine (shown with an "Rx" badge).
    pub is_prescription: bool,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price_minor: i64,
        category: impl Into<String>,
        is_prescription: bool,
    ) -> Self {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            price_minor,
            category: category.into(),
            is_prescription,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_minor(self.price_minor)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A product with a positive resolved quantity.
///
/// Derived from the catalog and the quantity store on every change and never
/// stored. Serializes flat: the product's fields sit next to `quantity` and
/// `subtotal_minor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,

    /// Always in `1..=99`.
    pub quantity: u8,

    /// `quantity × price_minor`, exactly.
    pub subtotal_minor: i64,
}

impl CartItem {
    /// Builds a cart line for `product`.
    ///
    /// Returns `None` for a zero quantity: zero never produces a line.
    pub fn from_product(product: &Product, quantity: u8) -> Option<Self> {
        if quantity == 0 {
            return None;
        }

        Some(CartItem {
            product: product.clone(),
            quantity,
            subtotal_minor: product.price().multiply_quantity(i64::from(quantity)).minor(),
        })
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_minor(self.subtotal_minor)
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Cart lines plus their totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartSummary {
    /// Lines in catalog order.
    pub items: Vec<CartItem>,

    /// Sum of every line's subtotal.
    pub grand_total_minor: i64,

    /// Sum of every line's quantity.
    pub total_items: u32,
}

impl CartSummary {
    /// Builds a summary from lines, computing both reductions.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let grand_total: Money = items.iter().map(CartItem::subtotal).sum();
        let total_items = items.iter().map(|i| u32::from(i.quantity)).sum();

        CartSummary {
            items,
            grand_total_minor: grand_total.minor(),
            total_items,
        }
    }

    #[inline]
    pub fn grand_total(&self) -> Money {
        Money::from_minor(self.grand_total_minor)
    }

    #[inline]
    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    /// Number of distinct products in the cart.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// An empty cart cannot be ordered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id() == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
