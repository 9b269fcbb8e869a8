//! # Report Commands
//!
//! Reports are built while the lock is held and returned as owned values,
//! so rendering never blocks other commands.

use mart_core::{reporting, EmployeeReport, InventoryReport, SalesReport};
use tracing::debug;

use crate::state::StoreState;

pub fn inventory_report(store: &StoreState) -> InventoryReport {
    debug!("inventory_report command");
    store.with_store(reporting::inventory_report)
}

pub fn employee_report(store: &StoreState) -> EmployeeReport {
    debug!("employee_report command");
    store.with_store(reporting::employee_report)
}

pub fn sales_report(store: &StoreState) -> SalesReport {
    debug!("sales_report command");
    store.with_store(reporting::sales_report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_reports_on_demo_store() {
        let store = StoreState::from_store(seed::demo_store().unwrap());

        let inventory = inventory_report(&store);
        assert_eq!(inventory.rows.len(), seed::DEMO_PRODUCTS.len());

        let employees = employee_report(&store);
        assert_eq!(employees.rows.len(), seed::DEMO_EMPLOYEES.len());

        let sales = sales_report(&store);
        assert!(sales.daily_revenue.is_zero());
    }
}
