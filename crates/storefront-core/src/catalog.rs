//! # Catalog
//!
//! The fixed list of purchasable products. A catalog is built once at
//! process start and shared read-only afterwards; there is no operation that
//! adds, edits or removes a product.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::filter::CategoryFilter;
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::validate_product;
use crate::MAX_ITEM_QUANTITY;

/// Seed row of the built-in sample table.
struct Seed {
    id: u32,
    name: &'static str,
    price_minor: i64,
    category: &'static str,
    is_prescription: bool,
}

const SAMPLE_PRODUCTS: [Seed; 4] = [
    Seed {
        id: 1,
        name: "Paracetamol 500mg",
        price_minor: 15_000,
        category: "Pain Relief",
        is_prescription: false,
    },
    Seed {
        id: 2,
        name: "Amoxicillin 500mg",
        price_minor: 45_000,
        category: "Antibiotic",
        is_prescription: true,
    },
    Seed {
        id: 3,
        name: "Vitamin C 1000mg",
        price_minor: 30_000,
        category: "Supplement",
        is_prescription: false,
    },
    Seed {
        id: 4,
        name: "Cetirizine 10mg",
        price_minor: 20_000,
        category: "Allergy",
        is_prescription: false,
    },
];

/// An immutable, ordered product table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// ## Errors
    /// - [`CoreError::DuplicateProductId`] if two records share an id
    /// - [`CoreError::Validation`] if a record fails
    ///   [`validate_product`]
    /// - [`CoreError::PriceOverflow`] if 99 of every product would not fit
    ///   in an `i64` grand total
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        let mut max_order = Money::zero();
        for product in &products {
            validate_product(product)?;
            if !seen.insert(product.id) {
                return Err(CoreError::DuplicateProductId(product.id));
            }
            max_order = product
                .price_minor
                .checked_mul(i64::from(MAX_ITEM_QUANTITY))
                .and_then(|line| max_order.checked_add(Money::from_minor(line)))
                .ok_or(CoreError::PriceOverflow(product.id))?;
        }

        Ok(Catalog { products })
    }

    /// The built-in pharmacy sample table.
    pub fn sample() -> Self {
        let products = SAMPLE_PRODUCTS
            .iter()
            .map(|s| Product::new(s.id, s.name, s.price_minor, s.category, s.is_prescription))
            .collect();

        Catalog { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`], but an unknown id is an error.
    pub fn require(&self, id: ProductId) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Checks that `category` is one of the selector's options.
    pub fn require_category(&self, category: &CategoryFilter) -> CoreResult<()> {
        match category {
            CategoryFilter::All => Ok(()),
            CategoryFilter::Exact(name) if self.iter().any(|p| p.category == *name) => Ok(()),
            CategoryFilter::Exact(name) => Err(CoreError::CategoryNotFound(name.clone())),
        }
    }

    /// Category selector options.
    ///
    /// `All` comes first, followed by every distinct category in the order it
    /// first appears in the catalog (not alphabetical).
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut seen = HashSet::new();
        let mut options = vec![CategoryFilter::All];
        for product in &self.products {
            if seen.insert(product.category.as_str()) {
                options.push(CategoryFilter::Exact(product.category.clone()));
            }
        }
        options
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
