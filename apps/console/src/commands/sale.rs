//! # Sale Commands
//!
//! ## Transaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create_sale() ──► SaleId                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add_to_sale(sale, product, qty) ──► LineItem   (repeat)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  complete_sale(sale, "cash", 0.10) ──► SaleSummary { total, ... }      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payment method and discount arrive as text and a fraction, the way the
//! operator types them; they are parsed here before the store is locked.

use mart_core::{CoreError, Discount, LineItem, Money, PaymentMethod, ProductId, Sale, SaleId};
use serde::Serialize;
use tracing::{debug, info};

use super::rejected;
use crate::error::ApiError;
use crate::state::StoreState;

/// What the operator sees after a sale completes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSummary {
    pub sale_id: SaleId,
    pub item_count: usize,
    pub subtotal: Money,
    pub discount: Discount,
    pub total: Money,
    pub payment_method: PaymentMethod,
}

pub fn create_sale(store: &StoreState) -> SaleId {
    let id = store.with_store_mut(|s| s.create_sale());
    info!(sale_id = %id, "Sale opened");
    id
}

pub fn add_to_sale(
    store: &StoreState,
    sale_id: SaleId,
    product_id: ProductId,
    quantity: i64,
) -> Result<LineItem, ApiError> {
    debug!(%sale_id, %product_id, quantity, "add_to_sale command");

    store
        .with_store_mut(|s| s.add_to_sale(sale_id, product_id, quantity))
        .map_err(|e| rejected("add_to_sale", e))
}

/// Finalizes a sale.
///
/// ## Arguments
/// * `payment_method` - `cash` or `card`, any case
/// * `discount` - sale-level discount as a fraction in [0, 1]
pub fn complete_sale(
    store: &StoreState,
    sale_id: SaleId,
    payment_method: &str,
    discount: f64,
) -> Result<SaleSummary, ApiError> {
    debug!(%sale_id, payment_method, discount, "complete_sale command");

    let method: PaymentMethod = payment_method
        .parse()
        .map_err(|e| rejected("complete_sale", CoreError::from(e)))?;
    let discount = Discount::from_fraction(discount).map_err(|e| rejected("complete_sale", e))?;

    let summary = store
        .with_store_mut(|s| {
            let total = s.complete_sale(sale_id, method, discount)?;
            let sale = s.sale(sale_id)?;
            Ok::<_, CoreError>(SaleSummary {
                sale_id,
                item_count: sale.items().len(),
                subtotal: sale.subtotal(),
                discount,
                total,
                payment_method: method,
            })
        })
        .map_err(|e| rejected("complete_sale", e))?;

    info!(
        %sale_id,
        total = %summary.total,
        payment_method = %method,
        "Sale completed"
    );
    Ok(summary)
}

pub fn get_sale(store: &StoreState, sale_id: SaleId) -> Result<Sale, ApiError> {
    debug!(%sale_id, "get_sale command");
    store
        .with_store(|s| s.sale(sale_id).cloned())
        .map_err(|e| rejected("get_sale", e))
}
