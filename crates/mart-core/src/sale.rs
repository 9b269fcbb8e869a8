//! # Sale
//!
//! A single transaction and its state machine.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  1. OPEN                                                               │
//! │     └── Sale::open(id) → Sale { status: Open, subtotal: 0 }            │
//! │                                                                         │
//! │  2. ADD ITEMS (repeatable, Open only)                                  │
//! │     └── add_line_item(&mut product, qty)                               │
//! │           ├── qty > 0 and qty <= product.quantity, else fail           │
//! │           ├── snapshot discounted unit price                           │
//! │           ├── line total and new subtotal must fit, else fail          │
//! │           ├── subtotal += qty × unit price                             │
//! │           └── product.quantity -= qty                                  │
//! │                                                                         │
//! │  3. FINALIZE (once)                                                    │
//! │     └── finalize(method, discount) → total                             │
//! │           └── Sale { status: Finalized } (terminal)                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no void or return path. A finalized sale is history.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::{Discount, Money};
use crate::types::{LineItem, PaymentMethod, Product, SaleId, SaleStatus};
use crate::validation::{ensure_representable, validate_sale_quantity};

/// A sale transaction.
///
/// Fields are private: the only ways to change a sale are
/// [`Sale::add_line_item`] and [`Sale::finalize`], which enforce the state
/// machine.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Sale {
    id: SaleId,
    status: SaleStatus,
    items: Vec<LineItem>,
    subtotal: Money,
    discount: Discount,
    payment_method: Option<PaymentMethod>,
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
    #[ts(as = "Option<String>")]
    finalized_at: Option<DateTime<Utc>>,
}

impl Sale {
    /// Opens an empty sale.
    pub fn open(id: SaleId) -> Self {
        Sale {
            id,
            status: SaleStatus::Open,
            items: Vec::new(),
            subtotal: Money::zero(),
            discount: Discount::zero(),
            payment_method: None,
            created_at: Utc::now(),
            finalized_at: None,
        }
    }

    /// Takes `quantity` units of `product` into this sale.
    ///
    /// Every check runs before anything is written, so on error neither the
    /// sale nor the product has changed.
    ///
    /// ## Errors
    /// - `InvalidSaleStatus` if the sale is finalized
    /// - `Validation` if quantity is not positive
    /// - `InsufficientStock` if quantity exceeds `product.quantity`
    /// - `Validation(OutOfRange)` if the line total or the new subtotal
    ///   overflows
    pub fn add_line_item(&mut self, product: &mut Product, quantity: i64) -> CoreResult<LineItem> {
        self.ensure_open()?;
        validate_sale_quantity(quantity)?;

        if !product.can_sell(quantity) {
            return Err(CoreError::InsufficientStock {
                product_id: product.id,
                name: product.name.clone(),
                available: product.quantity,
                requested: quantity,
            });
        }

        let item = LineItem::from_product(product, quantity)?;
        let subtotal =
            ensure_representable("subtotal", self.subtotal.checked_add(item.line_total))?;

        self.subtotal = subtotal;
        product.quantity -= quantity;
        self.items.push(item.clone());

        Ok(item)
    }

    /// Seals the sale and returns its total.
    ///
    /// ## Errors
    /// - `InvalidSaleStatus` if the sale was already finalized
    pub fn finalize(&mut self, payment_method: PaymentMethod, discount: Discount) -> CoreResult<Money> {
        self.ensure_open()?;

        self.payment_method = Some(payment_method);
        self.discount = discount;
        self.status = SaleStatus::Finalized;
        self.finalized_at = Some(Utc::now());

        Ok(self.total())
    }

    pub(crate) fn ensure_open(&self) -> CoreResult<()> {
        match self.status {
            SaleStatus::Open => Ok(()),
            current_status => Err(CoreError::InvalidSaleStatus {
                sale_id: self.id,
                current_status,
            }),
        }
    }

    pub fn id(&self) -> SaleId {
        self.id
    }

    pub fn status(&self) -> SaleStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == SaleStatus::Open
    }

    /// Line items in the order they were added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of line totals, before the sale discount.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Sale-level discount. Zero until finalized.
    pub fn discount(&self) -> Discount {
        self.discount
    }

    /// subtotal × (1 − sale discount).
    pub fn total(&self) -> Money {
        self.subtotal.apply_discount(self.discount)
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn finalized_at(&self) -> Option<DateTime<Utc>> {
        self.finalized_at
    }

    /// Total units across all line items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ValidationError};
    use crate::types::ProductId;

    fn test_product(price_cents: i64, quantity: i64) -> Product {
        Product {
            id: ProductId::new(1),
            name: "Milk".to_string(),
            price: Money::from_cents(price_cents),
            quantity,
            category: "Dairy".to_string(),
            supplier: "Acme".to_string(),
            discount: Discount::zero(),
        }
    }

    #[test]
    fn test_open_sale_is_empty() {
        let sale = Sale::open(SaleId::new(1));
        assert!(sale.is_open());
        assert!(sale.items().is_empty());
        assert!(sale.subtotal().is_zero());
        assert!(sale.discount().is_zero());
        assert!(sale.payment_method().is_none());
        assert!(sale.finalized_at().is_none());
    }

    #[test]
    fn test_add_line_item_decrements_stock() {
        let mut sale = Sale::open(SaleId::new(1));
        let mut product = test_product(1000, 5);

        let item = sale.add_line_item(&mut product, 3).unwrap();

        assert_eq!(item.line_total.cents(), 3000);
        assert_eq!(sale.subtotal().cents(), 3000);
        assert_eq!(sale.total_quantity(), 3);
        assert_eq!(product.quantity, 2);
    }

    #[test]
    fn test_add_line_item_uses_product_discount() {
        let mut sale = Sale::open(SaleId::new(1));
        let mut product = test_product(1000, 5);
        product.discount = Discount::from_bps(5000).unwrap();

        sale.add_line_item(&mut product, 2).unwrap();
        assert_eq!(sale.subtotal().cents(), 1000);
    }

    #[test]
    fn test_insufficient_stock_changes_nothing() {
        let mut sale = Sale::open(SaleId::new(1));
        let mut product = test_product(1000, 2);

        let err = sale.add_line_item(&mut product, 5).unwrap_err();

        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 2,
                requested: 5,
                ..
            }
        ));
        assert_eq!(product.quantity, 2);
        assert!(sale.subtotal().is_zero());
        assert!(sale.items().is_empty());
    }

    #[test]
    fn test_line_total_overflow_changes_nothing() {
        let mut sale = Sale::open(SaleId::new(1));
        let mut product = test_product(5_000_000_000_000_000_000, 2);

        let err = sale.add_line_item(&mut product, 2).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(product.quantity, 2);
        assert!(sale.subtotal().is_zero());
        assert!(sale.items().is_empty());
    }

    #[test]
    fn test_subtotal_overflow_keeps_earlier_items() {
        let mut sale = Sale::open(SaleId::new(1));
        let mut product = test_product(4_000_000_000_000_000_000, 3);

        sale.add_line_item(&mut product, 2).unwrap();
        let err = sale.add_line_item(&mut product, 1).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(product.quantity, 1);
        assert_eq!(sale.items().len(), 1);
        assert_eq!(sale.subtotal().cents(), 8_000_000_000_000_000_000);
    }

    #[test]
    fn test_selling_exact_stock_is_allowed() {
        let mut sale = Sale::open(SaleId::new(1));
        let mut product = test_product(100, 4);

        sale.add_line_item(&mut product, 4).unwrap();
        assert_eq!(product.quantity, 0);
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let mut sale = Sale::open(SaleId::new(1));
        let mut product = test_product(100, 4);

        assert!(sale.add_line_item(&mut product, 0).is_err());
        assert!(sale.add_line_item(&mut product, -2).is_err());
        assert_eq!(product.quantity, 4);
    }

    #[test]
    fn test_finalize_applies_sale_discount() {
        let mut sale = Sale::open(SaleId::new(1));
        let mut product = test_product(1000, 5);
        sale.add_line_item(&mut product, 3).unwrap();

        let total = sale
            .finalize(PaymentMethod::Cash, Discount::from_fraction(0.10).unwrap())
            .unwrap();

        assert_eq!(total.cents(), 2700);
        assert_eq!(sale.status(), SaleStatus::Finalized);
        assert_eq!(sale.payment_method(), Some(PaymentMethod::Cash));
        assert!(sale.finalized_at().is_some());
        // Subtotal is kept as recorded
        assert_eq!(sale.subtotal().cents(), 3000);
    }

    #[test]
    fn test_finalize_twice_fails() {
        let mut sale = Sale::open(SaleId::new(1));
        sale.finalize(PaymentMethod::Card, Discount::zero()).unwrap();

        let err = sale
            .finalize(PaymentMethod::Cash, Discount::from_bps(5000).unwrap())
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidSaleStatus { .. }));
        assert_eq!(sale.payment_method(), Some(PaymentMethod::Card));
        assert!(sale.discount().is_zero());
    }

    #[test]
    fn test_cannot_add_after_finalize() {
        let mut sale = Sale::open(SaleId::new(1));
        let mut product = test_product(1000, 5);
        sale.finalize(PaymentMethod::Cash, Discount::zero()).unwrap();

        let err = sale.add_line_item(&mut product, 1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidSaleStatus {
                current_status: SaleStatus::Finalized,
                ..
            }
        ));
        assert_eq!(product.quantity, 5);
    }
}
