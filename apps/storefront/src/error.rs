//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Driver line ──► parse ──► BadCommand? ───────────────────┐            │
//! │                    │                                       │            │
//! │                    ▼                                       ▼            │
//! │               Command Function                         ApiError        │
//! │               Result<T, ApiError>                          │            │
//! │                    │                                       │            │
//! │                    ├── CoreError::ProductNotFound ──► NOT_FOUND         │
//! │                    ├── CoreError::CategoryNotFound ─► NOT_FOUND         │
//! │                    └── Success ──────────────────────► response JSON    │
//! │                                                                         │
//! │  Quantity input itself never errors: it is clamped instead.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are serialized with a machine-readable `code` and a human-readable
//! `message`.

use serde::Serialize;
use storefront_core::CoreError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or category not found
    NotFound,

    /// Catalog data failed validation
    ValidationError,

    /// Driver line could not be understood
    BadCommand,

    /// Internal error (serialization, I/O)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn bad_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadCommand, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id.to_string()),
            CoreError::CategoryNotFound(name) => ApiError::not_found("Category", &name),
            CoreError::DuplicateProductId(id) => {
                tracing::error!(%id, "Catalog contains a duplicate product id");
                ApiError::validation(format!("Duplicate product id: {}", id))
            }
            CoreError::PriceOverflow(id) => {
                tracing::error!(%id, "Catalog prices overflow the order total");
                ApiError::validation(format!("Price too large at product {}", id))
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Response serialization failed: {}", err);
        ApiError::internal("Failed to serialize response")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{ProductId, ValidationError};

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::ProductNotFound(ProductId::new(42)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 42");

        let err: ApiError = CoreError::CategoryNotFound("Vaccines".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Category not found: Vaccines");

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");

        let err: ApiError = CoreError::PriceOverflow(ProductId::new(3)).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_serialization() {
        let value = serde_json::to_value(ApiError::bad_command("Unknown command: foo")).unwrap();
        assert_eq!(value["code"], "BAD_COMMAND");
        assert_eq!(value["message"], "Unknown command: foo");
    }

    #[test]
    fn test_display() {
        let err = ApiError::not_found("Product", "7");
        assert_eq!(err.to_string(), "[NotFound] Product not found: 7");
    }
}
