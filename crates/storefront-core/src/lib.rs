//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate is the derived-state pipeline behind the storefront: it turns
//! a search term, a category selection and a map of quantity pickers into the
//! visible product list and the cart summary. Everything here is a pure
//! function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    View (out of scope)                          │   │
//! │  │    Search box ──► Category picker ──► Quantity pickers          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/storefront                              │   │
//! │  │    SessionState, LoadingState, ConfigState                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │ catalog  │ │ quantity │ │  filter  │ │   cart   │          │   │
//! │  │   │ Product  │ │  Store   │ │  Engine  │ │Aggregator│          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItem, CartSummary)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`format`] - Currency formatting for display
//! - [`catalog`] - The fixed product table
//! - [`quantity`] - Quantity normalization and the per-product store
//! - [`filter`] - Product search and category selection
//! - [`cart`] - Cart aggregation
//! - [`error`] - Domain error types
//! - [`validation`] - Product record validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{cart, filter, Catalog, CategoryFilter, ProductId, QuantityStore, RawQuantity};
//!
//! let catalog = Catalog::sample();
//!
//! let visible = filter::filter_products(&catalog, "vitamin", &CategoryFilter::All);
//! assert_eq!(visible.len(), 1);
//!
//! let mut quantities = QuantityStore::new();
//! quantities.set(ProductId::new(1), RawQuantity::text("2"));
//!
//! let summary = cart::aggregate(&catalog, &quantities);
//! assert_eq!(summary.grand_total().minor(), 30_000);
//! assert_eq!(summary.total_items(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod format;
pub mod money;
pub mod quantity;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::CategoryFilter;
pub use format::CurrencyFormat;
pub use money::Money;
pub use quantity::{QuantityEntry, QuantityStore, RawQuantity};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest quantity a single picker accepts.
///
/// Typed values above this are clamped down, never rejected.
pub const MAX_ITEM_QUANTITY: u8 = 99;

/// Wire value of the "every category" selection.
pub const ALL_CATEGORIES: &str = "all";

/// Label shown for the "every category" selection.
pub const ALL_CATEGORIES_LABEL: &str = "All categories";
