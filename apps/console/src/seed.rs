//! # Demo Data
//!
//! `mart --demo` starts with a small catalog and roster so the menus and
//! reports have something to show.
//!
//! Products are `(name, price in cents, quantity, category, supplier)`;
//! employees are `(name, position, salary in cents, contact)`.

use mart_core::{CoreResult, Money, Store};
use tracing::info;

pub const DEMO_PRODUCTS: &[(&str, i64, i64, &str, &str)] = &[
    ("Whole Milk 1L", 189, 40, "Dairy", "Meadow Farms"),
    ("Cheddar 200g", 349, 25, "Dairy", "Meadow Farms"),
    ("Sourdough Loaf", 425, 12, "Bakery", "Corner Bakery"),
    ("Bananas 1kg", 129, 60, "Produce", "Green Valley"),
    ("Orange Juice 1L", 299, 30, "Beverages", "Sunpress"),
    ("Spaghetti 500g", 159, 45, "Grocery", "Pasta Co"),
    ("Dish Soap", 275, 18, "Household", "CleanCo"),
];

pub const DEMO_EMPLOYEES: &[(&str, &str, i64, &str)] = &[
    ("Ada Brooks", "Store Manager", 520_000, "ada@mart.example"),
    ("Sam Ortiz", "Cashier", 290_000, "555-0142"),
    ("Lee Park", "Stock Clerk", 275_000, "555-0178"),
];

/// Builds a store pre-filled with the demo catalog and roster.
pub fn demo_store() -> CoreResult<Store> {
    let mut store = Store::new();

    for (name, price, quantity, category, supplier) in DEMO_PRODUCTS {
        store.add_product(name, Money::from_cents(*price), *quantity, category, supplier)?;
    }

    for (name, position, salary, contact) in DEMO_EMPLOYEES {
        store.add_employee(name, position, Money::from_cents(*salary), contact)?;
    }

    info!(
        products = DEMO_PRODUCTS.len(),
        employees = DEMO_EMPLOYEES.len(),
        "Seeded demo store"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_store_ids_start_at_one() {
        let store = demo_store().unwrap();
        let ids: Vec<u64> = store.list_products().map(|p| p.id.get()).collect();
        assert_eq!(ids, (1..=DEMO_PRODUCTS.len() as u64).collect::<Vec<_>>());
        assert_eq!(store.list_employees().count(), DEMO_EMPLOYEES.len());
    }
}
