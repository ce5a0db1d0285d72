//! # Validation Module
//!
//! Checks applied to product records when a [`Catalog`](crate::Catalog) is
//! built. Runtime input (search text, quantities) is never validated here:
//! search terms are total and quantities are coerced by
//! [`crate::quantity::normalize`].
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_category, validate_product_name};
//!
//! assert!(validate_product_name("Vitamin C 1000mg").is_ok());
//! assert!(validate_category("all").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Product;
use crate::ALL_CATEGORIES;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 200;
const MAX_CATEGORY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a category label.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 100 characters
/// - Must not be `"all"`: that value selects every category
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_CATEGORY_LEN,
        });
    }

    if category == ALL_CATEGORIES {
        return Err(ValidationError::Reserved {
            field: "category".to_string(),
            value: category.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in minor units.
///
/// Zero is allowed (free items); negative prices are not.
pub fn validate_price_minor(price_minor: i64) -> ValidationResult<()> {
    if price_minor < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of a product record.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_category(&product.category)?;
    validate_price_minor(product.price_minor)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
