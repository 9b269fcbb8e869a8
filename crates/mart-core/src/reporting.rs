//! # Reporting
//!
//! Read-only projections of a [`Store`]. Each report is a plain serializable
//! value; formatting it as a table or as JSON is left to the caller.
//!
//! ```text
//! Store ──► inventory_report() ──► InventoryReport { rows: [id, name, price, qty, category] }
//!       ──► employee_report()  ──► EmployeeReport  { rows: [id, name, position, salary, contact] }
//!       ──► sales_report()     ──► SalesReport     { daily, monthly, completed, open }
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::store::Store;
use crate::types::{EmployeeId, ProductId, SaleStatus};

// =============================================================================
// Inventory
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct InventoryRow {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub quantity: i64,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct InventoryReport {
    pub rows: Vec<InventoryRow>,
}

impl InventoryReport {
    /// Sum of price × quantity over every row, at list price.
    ///
    /// `None` when the value is too large to represent.
    pub fn stock_value(&self) -> Option<Money> {
        self.rows.iter().try_fold(Money::zero(), |acc, row| {
            acc.checked_add(row.price.checked_mul_quantity(row.quantity)?)
        })
    }
}

/// Every product in id order.
pub fn inventory_report(store: &Store) -> InventoryReport {
    InventoryReport {
        rows: store
            .list_products()
            .map(|p| InventoryRow {
                id: p.id,
                name: p.name.clone(),
                price: p.price,
                quantity: p.quantity,
                category: p.category.clone(),
            })
            .collect(),
    }
}

// =============================================================================
// Employees
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct EmployeeRow {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub salary: Money,
    pub contact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct EmployeeReport {
    pub rows: Vec<EmployeeRow>,
}

/// Every employee in id order.
pub fn employee_report(store: &Store) -> EmployeeReport {
    EmployeeReport {
        rows: store
            .list_employees()
            .map(|e| EmployeeRow {
                id: e.id,
                name: e.name.clone(),
                position: e.position.clone(),
                salary: e.salary,
                contact: e.contact.clone(),
            })
            .collect(),
    }
}

// =============================================================================
// Sales
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct SalesReport {
    pub daily_revenue: Money,
    pub monthly_revenue: Money,
    /// Sales that reached `Finalized`.
    pub completed_sales: usize,
    /// Sales still open, including abandoned ones.
    pub open_sales: usize,
}

pub fn sales_report(store: &Store) -> SalesReport {
    let revenue = store.revenue();
    let completed_sales = store
        .sales()
        .filter(|s| s.status() == SaleStatus::Finalized)
        .count();

    SalesReport {
        daily_revenue: revenue.daily(),
        monthly_revenue: revenue.monthly(),
        completed_sales,
        open_sales: store.sales().count() - completed_sales,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
