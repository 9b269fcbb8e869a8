//! # Error Types
//!
//! Domain-specific error types for mart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mart-core errors (this file)                                          │
//! │  ├── CoreError        - Domain errors (not found, stock, sale state)   │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  └── ErrorKind        - The four caller-facing failure classes         │
//! │                                                                         │
//! │  Console errors (apps/console)                                         │
//! │  └── ApiError         - What the menu prints (code + message)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Console                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! Every operation that returns an error leaves the store exactly as it was.
//! There is no partial mutation to roll back.

use serde::Serialize;
use thiserror::Error;

use crate::money::Money;
use crate::types::{EmployeeId, ProductId, SaleId, SaleStatus};

// =============================================================================
// Error Kind
// =============================================================================

/// The four classes of failure a caller has to distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// An id did not resolve to a product, employee or sale.
    NotFound,
    /// Negative price/quantity/salary, discount outside [0,1], bad text,
    /// or an amount too large to represent.
    InvalidArgument,
    /// Requested quantity exceeds what is on hand.
    InsufficientStock,
    /// The sale is finalized and cannot be changed.
    InvalidSaleState,
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They are all recoverable: the console reports them and carries on.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    ///
    /// ## When This Occurs
    /// - Updating, removing or discounting an unknown id
    /// - Adding an unknown id to a sale
    /// - Product was removed after the cashier looked it up
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Employee id is not in the roster.
    #[error("Employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// Sale id was never issued by this store.
    #[error("Sale not found: {0}")]
    SaleNotFound(SaleId),

    /// Insufficient stock to add a line item (or to apply a stock adjustment).
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Sale (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=2
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Milk", available: 2, requested: 5 }
    ///      │
    ///      ▼
    /// Console shows: "[INSUFFICIENT_STOCK] Only 2 Milk in stock"
    /// ```
    #[error("Insufficient stock for {name} (#{product_id}): available {available}, requested {requested}")]
    InsufficientStock {
        product_id: ProductId,
        name: String,
        available: i64,
        requested: i64,
    },

    /// Sale is not in a state that allows the requested operation.
    ///
    /// ## When This Occurs
    /// - Adding items to a finalized sale
    /// - Finalizing a sale twice
    #[error("Sale {sale_id} is {current_status}, cannot perform operation")]
    InvalidSaleStatus {
        sale_id: SaleId,
        current_status: SaleStatus,
    },

    /// Discount fraction outside [0, 1].
    #[error("Invalid discount {value}: must be between 0 and 1")]
    InvalidDiscount { value: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Classifies the error into one of the four caller-facing kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::ProductNotFound(_)
            | CoreError::EmployeeNotFound(_)
            | CoreError::SaleNotFound(_) => ErrorKind::NotFound,
            CoreError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
            CoreError::InvalidSaleStatus { .. } => ErrorKind::InvalidSaleState,
            CoreError::InvalidDiscount { .. } | CoreError::Validation(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before any state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// An amount left the representable range.
    ///
    /// ## When This Occurs
    /// - price × quantity of a line item does not fit in [`Money::MAX`]
    /// - a sale subtotal or a revenue counter would pass [`Money::MAX`]
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: Money, max: Money },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., unparseable amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product_id: ProductId::new(1),
            name: "Milk".to_string(),
            available: 2,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Milk (#1): available 2, requested 5"
        );

        let err = CoreError::InvalidSaleStatus {
            sale_id: SaleId::new(3),
            current_status: SaleStatus::Finalized,
        };
        assert_eq!(
            err.to_string(),
            "Sale 3 is finalized, cannot perform operation"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");

        let err = ValidationError::OutOfRange {
            field: "line total".to_string(),
            min: Money::zero(),
            max: Money::from_cents(100),
        };
        assert_eq!(err.to_string(), "line total must be between $0.00 and $1.00");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            CoreError::EmployeeNotFound(EmployeeId::new(999)).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            CoreError::InvalidDiscount {
                value: "1.5".to_string()
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            CoreError::InvalidSaleStatus {
                sale_id: SaleId::new(1),
                current_status: SaleStatus::Finalized,
            }
            .kind(),
            ErrorKind::InvalidSaleState
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.kind(), ErrorKind::InvalidArgument);
    }
}
