//! # Validation Module
//!
//! Input validation rules for Mart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompts (apps/console)                               │
//! │  ├── Parse checks (is it a number? an amount?)                         │
//! │  └── Re-ask on malformed input                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rules                                 │
//! │  ├── Non-negative prices, stock and salaries                           │
//! │  └── Required names                                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store operations                                             │
//! │  └── Stock availability, sale state                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every check runs before a collection is touched, which is what makes a
//! failed operation leave no trace.

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name (product or employee).
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters after trimming
///
/// ## Example
/// ```rust
/// use mart_core::validation::validate_name;
///
/// assert!(validate_name("name", "Whole Milk 1L").is_ok());
/// assert!(validate_name("name", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use mart_core::money::Money;
/// use mart_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity on hand (catalog add/update).
///
/// ## Rules
/// - Must be non-negative; zero means "out of stock", which is fine
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates the quantity of a sale line item.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Sale: Add Item                                                         │
/// │                                                                         │
/// │  Cashier enters quantity: 3                                            │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_sale_quantity(3) ← THIS FUNCTION                             │
/// │       │                                                                 │
/// │       ├── qty <= 0? → Error: "quantity must be positive"               │
/// │       │                                                                 │
/// │       └── OK → check stock, then append the line item                  │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_sale_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a salary at hiring time.
pub fn validate_salary(salary: Money) -> ValidationResult<()> {
    if salary.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "salary".to_string(),
        });
    }

    Ok(())
}

/// Turns the result of a checked money operation into a value, or an
/// `OutOfRange` error naming `field` when it overflowed.
///
/// ## Example
/// ```rust
/// use mart_core::money::Money;
/// use mart_core::validation::ensure_representable;
///
/// let ok = Money::from_cents(100).checked_add(Money::from_cents(1));
/// assert_eq!(ensure_representable("subtotal", ok).unwrap().cents(), 101);
///
/// let overflowed = Money::MAX.checked_mul_quantity(2);
/// assert!(ensure_representable("line total", overflowed).is_err());
/// ```
pub fn ensure_representable(field: &str, amount: Option<Money>) -> ValidationResult<Money> {
    amount.ok_or_else(|| ValidationError::OutOfRange {
        field: field.to_string(),
        min: Money::zero(),
        max: Money::MAX,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
