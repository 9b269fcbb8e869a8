//! # Rendering
//!
//! Turns report values into text for stdout: aligned tables by default, or
//! pretty JSON with `--json`. Functions return `String` so they can be
//! tested without capturing output.

use mart_core::{EmployeeReport, InventoryReport, LineItem, SalesReport};
use serde::Serialize;

use crate::commands::sale::SaleSummary;
use crate::state::ConfigState;

/// Pretty-printed JSON for any serializable value.
pub fn json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Left-aligned table with a header row and a dashed rule.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(headers.to_vec()));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    out.push('\n');
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out
}

pub fn inventory(report: &InventoryReport, config: &ConfigState) -> String {
    if report.rows.is_empty() {
        return "No products in the catalog.\n".to_string();
    }

    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.name.clone(),
                config.format_currency(r.price),
                r.quantity.to_string(),
                r.category.clone(),
            ]
        })
        .collect();

    let stock_value = report
        .stock_value()
        .map(|value| config.format_currency(value))
        .unwrap_or_else(|| "n/a".to_string());

    let mut out = table(&["ID", "Name", "Price", "Quantity", "Category"], &rows);
    out.push_str(&format!("\nStock value: {stock_value}\n"));
    out
}

pub fn employees(report: &EmployeeReport, config: &ConfigState) -> String {
    if report.rows.is_empty() {
        return "No employees on the roster.\n".to_string();
    }

    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.name.clone(),
                r.position.clone(),
                config.format_currency(r.salary),
                r.contact.clone(),
            ]
        })
        .collect();

    table(&["ID", "Name", "Position", "Salary", "Contact"], &rows)
}

pub fn sales(report: &SalesReport, config: &ConfigState) -> String {
    format!(
        "Daily revenue:   {}\nMonthly revenue: {}\nCompleted sales: {}\nOpen sales:      {}\n",
        config.format_currency(report.daily_revenue),
        config.format_currency(report.monthly_revenue),
        report.completed_sales,
        report.open_sales,
    )
}

pub fn line_item(item: &LineItem, config: &ConfigState) -> String {
    format!(
        "Added {} x {} @ {} = {}",
        item.quantity,
        item.name_snapshot,
        config.format_currency(item.unit_price),
        config.format_currency(item.line_total),
    )
}

pub fn sale_summary(summary: &SaleSummary, config: &ConfigState) -> String {
    format!(
        "Sale {} completed ({}, {} item(s))\nSubtotal: {}\nDiscount: {}\nTotal:    {}\n",
        summary.sale_id,
        summary.payment_method,
        summary.item_count,
        config.format_currency(summary.subtotal),
        summary.discount,
        config.format_currency(summary.total),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mart_core::{reporting, Money, Store};

    #[test]
    fn test_inventory_table() {
        let mut store = Store::new();
        store
            .add_product("Milk", Money::from_cents(1000), 5, "Dairy", "Acme")
            .unwrap();

        let text = inventory(&reporting::inventory_report(&store), &ConfigState::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID  Name  Price   Quantity  Category");
        assert!(lines[1].starts_with("--  ----  ------"));
        assert_eq!(lines[2], "1   Milk  $10.00  5         Dairy");
        assert!(text.contains("Stock value: $50.00"));
    }

    #[test]
    fn test_inventory_stock_value_too_large() {
        let mut store = Store::new();
        store
            .add_product("Press", Money::from_cents(100_000_000), 100_000_000_000, "", "")
            .unwrap();

        let text = inventory(&reporting::inventory_report(&store), &ConfigState::default());
        assert!(text.contains("$1000000.00"));
        assert!(text.ends_with("Stock value: n/a\n"));
    }

    #[test]
    fn test_empty_reports() {
        let store = Store::new();
        let config = ConfigState::default();

        assert_eq!(
            inventory(&reporting::inventory_report(&store), &config),
            "No products in the catalog.\n"
        );
        assert_eq!(
            employees(&reporting::employee_report(&store), &config),
            "No employees on the roster.\n"
        );
        assert!(sales(&reporting::sales_report(&store), &config).contains("Daily revenue:   $0.00"));
    }

    #[test]
    fn test_json_rendering() {
        let mut store = Store::new();
        store
            .add_employee("Ada", "Cashier", Money::from_cents(300_000), "555-0100")
            .unwrap();

        let text = json(&reporting::employee_report(&store)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["rows"][0]["name"], "Ada");
        assert_eq!(value["rows"][0]["salary"], 300_000);
    }
}
