//! # Domain Types
//!
//! Core domain types used throughout Mart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Employee     │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  id (u64)       │   │  product_id     │       │
//! │  │  name           │   │  name           │   │  name_snapshot  │       │
//! │  │  price          │   │  position       │   │  quantity       │       │
//! │  │  quantity       │   │  salary         │   │  unit_price     │       │
//! │  │  discount       │   │  joined_at      │   │  line_total     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │   SaleStatus    │   │ PaymentMethod   │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  Open           │   │  Cash           │                              │
//! │  │  Finalized      │   │  Card           │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Ids are sequential integers handed out by the owning collection. A
//! counter is never rewound, so a deleted id is never issued again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::{Discount, Money};
use crate::validation::{ensure_representable, ValidationResult};

// =============================================================================
// Identifiers
// =============================================================================

macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw id.
            #[inline]
            pub const fn new(raw: u64) -> Self {
                $name(raw)
            }

            /// Returns the raw id.
            #[inline]
            pub const fn get(&self) -> u64 {
                self.0
            }

            /// Returns this id and advances the counter past it.
            pub(crate) fn take_next(counter: &mut u64) -> Self {
                let id = $name(*counter);
                *counter += 1;
                id
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                $name(raw)
            }
        }
    };
}

sequential_id!(
    /// Identity of a product in the catalog.
    ProductId
);

sequential_id!(
    /// Identity of an employee in the roster.
    EmployeeId
);

sequential_id!(
    /// Identity of a sale in the store's history.
    SaleId
);

/// First id handed out by every counter.
pub const FIRST_ID: u64 = 1;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Fields are public for reading; only [`crate::ProductCatalog`] hands out
/// mutable access, which is how the stock invariant is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog-assigned identity.
    pub id: ProductId,

    /// Display name shown to the cashier and on reports.
    pub name: String,

    /// Unit price before the product discount.
    pub price: Money,

    /// Quantity on hand. Never negative.
    pub quantity: i64,

    /// Free-form grouping shown in the inventory report.
    pub category: String,

    pub supplier: String,

    /// Product-level discount applied when the product is added to a sale.
    pub discount: Discount,
}

impl Product {
    /// Unit price after the product's own discount.
    ///
    /// ## Example
    /// ```rust
    /// use mart_core::{Discount, Money, Product, ProductId};
    ///
    /// let mut product = Product {
    ///     id: ProductId::new(1),
    ///     name: "Milk".into(),
    ///     price: Money::from_cents(1000),
    ///     quantity: 5,
    ///     category: "Dairy".into(),
    ///     supplier: "Acme".into(),
    ///     discount: Discount::zero(),
    /// };
    /// assert_eq!(product.discounted_price().cents(), 1000);
    ///
    /// product.discount = Discount::from_fraction(0.25).unwrap();
    /// assert_eq!(product.discounted_price().cents(), 750);
    /// ```
    #[inline]
    pub fn discounted_price(&self) -> Money {
        self.price.apply_discount(self.discount)
    }

    /// Checks if `quantity` units can be taken from stock right now.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.quantity >= quantity
    }

    /// Checks if at least one unit is on hand.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }
}

// =============================================================================
// Employee
// =============================================================================

/// A member of staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Employee {
    /// Roster-assigned identity.
    pub id: EmployeeId,

    /// Full name as entered at hiring.
    pub name: String,

    /// Job title; may change through an update.
    pub position: String,

    /// Salary; may change through an update.
    pub salary: Money,

    /// Free-form contact details (phone, email).
    pub contact: String,

    /// When the employee was added. Set once, never changed.
    #[ts(as = "String")]
    pub joined_at: DateTime<Utc>,
}

// =============================================================================
// Sale Status
// =============================================================================

/// The status of a sale transaction.
///
/// ```text
///   open() ──► Open ──finalize()──► Finalized (terminal)
///               │  ▲
///               └──┘ add_line_item()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    /// Sale is in progress (items being added).
    Open,
    /// Sale has been paid and its total posted to revenue.
    Finalized,
}

impl Default for SaleStatus {
    fn default() -> Self {
        SaleStatus::Open
    }
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaleStatus::Open => write!(f, "open"),
            SaleStatus::Finalized => write!(f, "finalized"),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on an external terminal.
    Card,
}

impl PaymentMethod {
    /// All accepted methods, in menu order.
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Cash, PaymentMethod::Card];

    /// Lowercase name used for parsing and display.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            _ => Err(ValidationError::NotAllowed {
                field: "payment method".to_string(),
                allowed: PaymentMethod::ALL
                    .iter()
                    .map(|m| m.as_str().to_string())
                    .collect(),
            }),
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A line item in a sale.
/// Uses snapshot pattern to freeze product data at the time of addition, so
/// repricing or deleting the product later never changes a recorded sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Product the units came from. Not a live reference.
    pub product_id: ProductId,
    /// Product name at time of sale (frozen).
    pub name_snapshot: String,
    /// Units sold.
    pub quantity: i64,
    /// Discounted unit price at time of sale (frozen).
    pub unit_price: Money,
    /// unit_price × quantity.
    pub line_total: Money,
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Snapshots `product` for `quantity` units at its current discounted price.
    ///
    /// Fails with `OutOfRange` when the line total does not fit in [`Money`].
    pub fn from_product(product: &Product, quantity: i64) -> ValidationResult<Self> {
        let unit_price = product.discounted_price();
        let line_total =
            ensure_representable("line total", unit_price.checked_mul_quantity(quantity))?;

        Ok(LineItem {
            product_id: product.id,
            name_snapshot: product.name.clone(),
            quantity,
            unit_price,
            line_total,
            added_at: Utc::now(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(price_cents: i64, quantity: i64) -> Product {
        Product {
            id: ProductId::new(7),
            name: "Bread".to_string(),
            price: Money::from_cents(price_cents),
            quantity,
            category: "Bakery".to_string(),
            supplier: "Local".to_string(),
            discount: Discount::zero(),
        }
    }

    #[test]
    fn test_sequential_ids() {
        let mut counter = FIRST_ID;
        let a = ProductId::take_next(&mut counter);
        let b = ProductId::take_next(&mut counter);
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert_eq!(counter, 3);
        assert_eq!(b.to_string(), "2");
    }

    #[test]
    fn test_product_stock_checks() {
        let product = test_product(250, 2);
        assert!(product.can_sell(2));
        assert!(!product.can_sell(3));
        assert!(product.is_in_stock());
        assert!(!test_product(250, 0).is_in_stock());
    }

    #[test]
    fn test_line_item_freezes_discounted_price() {
        let mut product = test_product(1000, 5);
        product.discount = Discount::from_bps(2000).unwrap();

        let item = LineItem::from_product(&product, 3).unwrap();
        assert_eq!(item.unit_price.cents(), 800);
        assert_eq!(item.line_total.cents(), 2400);
        assert_eq!(item.name_snapshot, "Bread");

        product.price = Money::from_cents(5000);
        assert_eq!(item.unit_price.cents(), 800);
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!(" CARD ".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_sale_status_default() {
        assert_eq!(SaleStatus::default(), SaleStatus::Open);
        assert_eq!(SaleStatus::Finalized.to_string(), "finalized");
    }
}
