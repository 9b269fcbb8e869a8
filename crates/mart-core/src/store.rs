//! # Store
//!
//! The orchestrator: owns the catalog, the roster, the sale history and the
//! revenue ledger, and is the only way callers reach them.
//!
//! ## Sale Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Sale Flow                                 │
//! │                                                                         │
//! │  create_sale() ──► SaleId (sale registered in history, Open)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add_to_sale(sale_id, product_id, qty)  (repeat)                       │
//! │       ├── resolve sale      → SaleNotFound                             │
//! │       ├── resolve product   → ProductNotFound                          │
//! │       └── Sale::add_line_item(&mut product, qty)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  complete_sale(sale_id, method, discount)                              │
//! │       ├── sale must be open, revenue + total must fit                  │
//! │       ├── Sale::finalize → total                                       │
//! │       └── revenue.daily += total; revenue.monthly += total             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Store` is a plain value. Callers that share it across threads wrap it
//! in a lock and run each call inside one acquisition.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};
use ts_rs::TS;

use crate::catalog::ProductCatalog;
use crate::error::{CoreError, CoreResult};
use crate::money::{Discount, Money};
use crate::roster::EmployeeRoster;
use crate::sale::Sale;
use crate::types::{
    Employee, EmployeeId, LineItem, PaymentMethod, Product, ProductId, SaleId, FIRST_ID,
};
use crate::validation::ensure_representable;

// =============================================================================
// Revenue Ledger
// =============================================================================

/// Running revenue totals.
///
/// "Daily" and "monthly" are labels only; neither is tied to a calendar and
/// neither is ever reset. Both only grow, and only when a sale completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct RevenueLedger {
    daily: Money,
    monthly: Money,
}

impl RevenueLedger {
    pub fn daily(&self) -> Money {
        self.daily
    }

    pub fn monthly(&self) -> Money {
        self.monthly
    }

    /// The ledger after `amount` is added to both counters, or
    /// `OutOfRange` if either would overflow. `self` is left untouched.
    pub(crate) fn posted(&self, amount: Money) -> CoreResult<RevenueLedger> {
        Ok(RevenueLedger {
            daily: ensure_representable("daily revenue", self.daily.checked_add(amount))?,
            monthly: ensure_representable("monthly revenue", self.monthly.checked_add(amount))?,
        })
    }
}

// =============================================================================
// Store
// =============================================================================

#[derive(Debug, Clone)]
pub struct Store {
    catalog: ProductCatalog,
    roster: EmployeeRoster,
    sales: BTreeMap<SaleId, Sale>,
    next_sale_id: u64,
    revenue: RevenueLedger,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store {
            catalog: ProductCatalog::new(),
            roster: EmployeeRoster::new(),
            sales: BTreeMap::new(),
            next_sale_id: FIRST_ID,
            revenue: RevenueLedger::default(),
        }
    }

    // -------------------------------------------------------------------------
    // Products
    // -------------------------------------------------------------------------

    pub fn add_product(
        &mut self,
        name: &str,
        price: Money,
        quantity: i64,
        category: &str,
        supplier: &str,
    ) -> CoreResult<ProductId> {
        self.catalog.add(name, price, quantity, category, supplier)
    }

    pub fn update_product(&mut self, id: ProductId, price: Money, quantity: i64) -> CoreResult<()> {
        self.catalog.update(id, price, quantity)
    }

    pub fn remove_product(&mut self, id: ProductId) -> CoreResult<Product> {
        self.catalog.remove(id)
    }

    pub fn set_product_discount(&mut self, id: ProductId, discount: Discount) -> CoreResult<()> {
        self.catalog.set_discount(id, discount)
    }

    /// Restock (positive delta) or write off (negative delta).
    pub fn adjust_stock(&mut self, id: ProductId, delta: i64) -> CoreResult<i64> {
        self.catalog.adjust_stock(id, delta)
    }

    pub fn product(&self, id: ProductId) -> CoreResult<&Product> {
        self.catalog.get(id)
    }

    pub fn list_products(&self) -> impl Iterator<Item = &Product> {
        self.catalog.list()
    }

    // -------------------------------------------------------------------------
    // Employees
    // -------------------------------------------------------------------------

    pub fn add_employee(
        &mut self,
        name: &str,
        position: &str,
        salary: Money,
        contact: &str,
    ) -> CoreResult<EmployeeId> {
        self.roster.add(name, position, salary, contact)
    }

    pub fn update_employee(
        &mut self,
        id: EmployeeId,
        salary: Money,
        position: &str,
    ) -> CoreResult<()> {
        self.roster.update(id, salary, position)
    }

    pub fn remove_employee(&mut self, id: EmployeeId) -> CoreResult<Employee> {
        self.roster.remove(id)
    }

    pub fn employee(&self, id: EmployeeId) -> CoreResult<&Employee> {
        self.roster.get(id)
    }

    pub fn list_employees(&self) -> impl Iterator<Item = &Employee> {
        self.roster.list()
    }

    // -------------------------------------------------------------------------
    // Sales
    // -------------------------------------------------------------------------

    /// Opens a sale and records it in the history straight away.
    ///
    /// A sale that is opened and never completed stays in the history as an
    /// open sale with no effect on revenue.
    pub fn create_sale(&mut self) -> SaleId {
        let id = SaleId::take_next(&mut self.next_sale_id);
        debug!(sale_id = %id, "Opening sale");
        self.sales.insert(id, Sale::open(id));
        id
    }

    /// Moves `quantity` units of a product into an open sale.
    ///
    /// ## Errors
    /// - `SaleNotFound` / `ProductNotFound` for unknown ids
    /// - anything [`Sale::add_line_item`] rejects; the product and the sale
    ///   are then unchanged
    pub fn add_to_sale(
        &mut self,
        sale_id: SaleId,
        product_id: ProductId,
        quantity: i64,
    ) -> CoreResult<LineItem> {
        let sale = self
            .sales
            .get_mut(&sale_id)
            .ok_or(CoreError::SaleNotFound(sale_id))?;
        let product = self.catalog.get_mut(product_id)?;

        let item = sale.add_line_item(product, quantity)?;

        debug!(
            %sale_id,
            %product_id,
            quantity,
            line_total = %item.line_total,
            remaining = product.quantity,
            "Added item to sale"
        );

        Ok(item)
    }

    /// Finalizes a sale and posts its total to revenue.
    ///
    /// The new revenue totals are computed before the sale is sealed. A
    /// completion that fails, whether on sale state or on overflow, leaves
    /// both the sale and the ledger as they were.
    pub fn complete_sale(
        &mut self,
        sale_id: SaleId,
        payment_method: PaymentMethod,
        discount: Discount,
    ) -> CoreResult<Money> {
        let sale = self
            .sales
            .get_mut(&sale_id)
            .ok_or(CoreError::SaleNotFound(sale_id))?;

        sale.ensure_open()?;
        let revenue = self
            .revenue
            .posted(sale.subtotal().apply_discount(discount))?;

        let total = sale.finalize(payment_method, discount)?;
        self.revenue = revenue;

        info!(
            %sale_id,
            %total,
            payment_method = %payment_method,
            %discount,
            items = sale.items().len(),
            "Sale completed"
        );

        Ok(total)
    }

    pub fn sale(&self, id: SaleId) -> CoreResult<&Sale> {
        self.sales.get(&id).ok_or(CoreError::SaleNotFound(id))
    }

    /// Sale history, open and finalized, by id ascending.
    pub fn sales(&self) -> impl Iterator<Item = &Sale> {
        self.sales.values()
    }

    pub fn revenue(&self) -> RevenueLedger {
        self.revenue
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================


// =============================================================================
// Property Tests
// =============================================================================
