//! # Console Error Types
//!
//! Two layers of errors live here.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Console Error Handling                              │
//! │                                                                         │
//! │  CoreError (mart-core)                                                 │
//! │       │  From<CoreError>                                               │
//! │       ▼                                                                 │
//! │  ApiError { code, message }   ← what a command returns                 │
//! │       │                                                                 │
//! │       ├── menu: print "[CODE] message", keep going                     │
//! │       └── startup (demo seed): bubble up as AppError, exit non-zero    │
//! │                                                                         │
//! │  AppError  ← terminal / serialization failures, ends the session       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use mart_core::{CoreError, ErrorKind};
use serde::Serialize;
use thiserror::Error;

/// Error returned from console commands.
///
/// ## Serialization
/// Serialized for JSON consumers as:
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Insufficient stock for Milk (#1): available 2, requested 5"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product, employee or sale id is unknown
    NotFound,

    /// Input failed a business rule
    ValidationError,

    /// Not enough units on hand
    InsufficientStock,

    /// Sale is already finalized
    InvalidSaleState,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::InvalidSaleState => "INVALID_SALE_STATE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
///
/// The code follows [`CoreError::kind`]. The core messages are already
/// written for people, so they are passed through unchanged; a wrapped
/// validation failure drops its "Validation error:" prefix.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = ErrorCode::from(err.kind());
        let message = match err {
            CoreError::Validation(inner) => inner.to_string(),
            other => other.to_string(),
        };
        ApiError::new(code, message)
    }
}

impl From<ErrorKind> for ErrorCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NotFound => ErrorCode::NotFound,
            ErrorKind::InvalidArgument => ErrorCode::ValidationError,
            ErrorKind::InsufficientStock => ErrorCode::InsufficientStock,
            ErrorKind::InvalidSaleState => ErrorCode::InvalidSaleState,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Errors that end the session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("could not render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use mart_core::{EmployeeId, Money, ProductId, SaleId, SaleStatus, ValidationError};

    #[test]
    fn test_display_uses_screaming_code() {
        let err = ApiError::from(CoreError::EmployeeNotFound(EmployeeId::new(999)));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.to_string(), "[NOT_FOUND] Employee not found: 999");
    }

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::InsufficientStock {
            product_id: ProductId::new(1),
            name: "Milk".to_string(),
            available: 2,
            requested: 5,
        });
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert!(err.message.contains("available 2"));

        let err = ApiError::from(CoreError::InvalidSaleStatus {
            sale_id: SaleId::new(1),
            current_status: SaleStatus::Finalized,
        });
        assert_eq!(err.code, ErrorCode::InvalidSaleState);

        let err = ApiError::from(CoreError::Validation(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "price must not be negative");
    }

    #[test]
    fn test_code_follows_core_kind() {
        let errors = [
            CoreError::ProductNotFound(ProductId::new(7)),
            CoreError::SaleNotFound(SaleId::new(7)),
            CoreError::InvalidDiscount {
                value: "1.5".to_string(),
            },
            CoreError::Validation(ValidationError::OutOfRange {
                field: "line total".to_string(),
                min: Money::zero(),
                max: Money::MAX,
            }),
        ];

        for err in errors {
            let kind = err.kind();
            assert_eq!(ApiError::from(err).code, ErrorCode::from(kind));
        }
    }

    #[test]
    fn test_overflow_reports_as_validation_error() {
        let err = ApiError::from(CoreError::Validation(ValidationError::OutOfRange {
            field: "subtotal".to_string(),
            min: Money::zero(),
            max: Money::from_cents(100),
        }));
        assert_eq!(err.to_string(), "[VALIDATION_ERROR] subtotal must be between $0.00 and $1.00");
    }

    #[test]
    fn test_json_shape() {
        let err = ApiError::new(ErrorCode::InvalidSaleState, "Sale 1 is finalized");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_SALE_STATE");
        assert_eq!(json["message"], "Sale 1 is finalized");
    }
}
