//! # Interactive Menus
//!
//! ```text
//! Main Menu
//! ├── Product Management ── add / update / remove / discount / adjust stock / view
//! ├── Employee Management ─ add / update / remove / view
//! ├── Sales Management ──── new sale: (product id, quantity)* → payment → discount
//! ├── Reports ───────────── inventory / sales / employees
//! └── Exit
//! ```
//!
//! Prompts re-ask until the input parses. A command that fails prints
//! `[CODE] message` and returns to the menu it came from; only terminal
//! errors end the session.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use mart_core::{EmployeeId, Money, PaymentMethod, ProductId};
use tracing::debug;

use crate::cli::ReportKind;
use crate::commands::employee::{self, AddEmployeeRequest};
use crate::commands::product::{self, AddProductRequest};
use crate::commands::{report, sale};
use crate::error::{ApiError, AppResult};
use crate::render;
use crate::state::{ConfigState, StoreState};

const MAIN_ITEMS: [&str; 5] = [
    "Product Management",
    "Employee Management",
    "Sales Management",
    "Reports",
    "Exit",
];

const PRODUCT_ITEMS: [&str; 7] = [
    "Add Product",
    "Update Product",
    "Remove Product",
    "Set Product Discount",
    "Adjust Stock",
    "View Products",
    "Back",
];

const EMPLOYEE_ITEMS: [&str; 5] = [
    "Add Employee",
    "Update Employee",
    "Remove Employee",
    "View Employees",
    "Back",
];

const SALES_ITEMS: [&str; 2] = ["New Sale", "Back"];

const REPORT_ITEMS: [&str; 4] = ["Inventory Report", "Sales Report", "Employee Report", "Back"];

pub struct Console {
    store: StoreState,
    config: ConfigState,
    theme: ColorfulTheme,
}

impl Console {
    pub fn new(store: StoreState, config: ConfigState) -> Self {
        Console {
            store,
            config,
            theme: ColorfulTheme::default(),
        }
    }

    /// Main menu loop; returns when the operator picks Exit.
    pub fn run(&self) -> AppResult<()> {
        println!("=== {} ===", self.config.store_name);

        loop {
            match self.select("Main Menu", &MAIN_ITEMS)? {
                0 => self.product_menu()?,
                1 => self.employee_menu()?,
                2 => self.sales_menu()?,
                3 => self.report_menu()?,
                _ => break,
            }
        }

        println!("Goodbye.");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Submenus
    // -------------------------------------------------------------------------

    fn product_menu(&self) -> AppResult<()> {
        loop {
            match self.select("Product Management", &PRODUCT_ITEMS)? {
                0 => {
                    let req = AddProductRequest {
                        name: self.text("Product name")?,
                        price: self.money("Price")?,
                        quantity: self.non_negative("Quantity")?,
                        category: self.optional_text("Category")?,
                        supplier: self.optional_text("Supplier")?,
                    };
                    self.outcome(product::add_product(&self.store, req), |id| {
                        format!("Product added with id {id}")
                    });
                }
                1 => {
                    let id = ProductId::new(self.id("Product id")?);
                    let price = self.money("New price")?;
                    let quantity = self.non_negative("New quantity")?;
                    self.outcome(
                        product::update_product(&self.store, id, price, quantity),
                        |_| format!("Product {id} updated"),
                    );
                }
                2 => {
                    let id = ProductId::new(self.id("Product id")?);
                    self.outcome(product::remove_product(&self.store, id), |p| {
                        format!("Removed {} ({})", p.name, p.id)
                    });
                }
                3 => {
                    let id = ProductId::new(self.id("Product id")?);
                    let fraction = self.fraction("Discount (0 - 1)")?;
                    self.outcome(
                        product::set_product_discount(&self.store, id, fraction),
                        |d| format!("Product {id} now {d} off"),
                    );
                }
                4 => {
                    let id = ProductId::new(self.id("Product id")?);
                    let delta: i64 = Input::with_theme(&self.theme)
                        .with_prompt("Change in stock (negative to write off)")
                        .interact_text()?;
                    self.outcome(product::adjust_stock(&self.store, id, delta), |q| {
                        format!("Product {id} now has {q} in stock")
                    });
                }
                5 => self.show_report(ReportKind::Inventory)?,
                _ => return Ok(()),
            }
        }
    }

    fn employee_menu(&self) -> AppResult<()> {
        loop {
            match self.select("Employee Management", &EMPLOYEE_ITEMS)? {
                0 => {
                    let req = AddEmployeeRequest {
                        name: self.text("Employee name")?,
                        position: self.optional_text("Position")?,
                        salary: self.money("Salary")?,
                        contact: self.optional_text("Contact")?,
                    };
                    self.outcome(employee::add_employee(&self.store, req), |id| {
                        format!("Employee added with id {id}")
                    });
                }
                1 => {
                    let id = EmployeeId::new(self.id("Employee id")?);
                    let salary = self.money("New salary")?;
                    let position = self.optional_text("New position")?;
                    self.outcome(
                        employee::update_employee(&self.store, id, salary, &position),
                        |_| format!("Employee {id} updated"),
                    );
                }
                2 => {
                    let id = EmployeeId::new(self.id("Employee id")?);
                    self.outcome(employee::remove_employee(&self.store, id), |e| {
                        format!("Removed {} ({})", e.name, e.id)
                    });
                }
                3 => self.show_report(ReportKind::Employees)?,
                _ => return Ok(()),
            }
        }
    }

    fn sales_menu(&self) -> AppResult<()> {
        loop {
            match self.select("Sales Management", &SALES_ITEMS)? {
                0 => self.new_sale()?,
                _ => return Ok(()),
            }
        }
    }

    fn new_sale(&self) -> AppResult<()> {
        let sale_id = sale::create_sale(&self.store);
        println!("Sale {sale_id} opened");

        loop {
            let product_id = ProductId::new(self.id("Product id")?);
            let quantity: i64 = Input::with_theme(&self.theme)
                .with_prompt("Quantity")
                .validate_with(|q: &i64| -> Result<(), &str> {
                    if *q > 0 {
                        Ok(())
                    } else {
                        Err("quantity must be positive")
                    }
                })
                .interact_text()?;

            self.outcome(
                sale::add_to_sale(&self.store, sale_id, product_id, quantity),
                |item| render::line_item(item, &self.config),
            );

            let more = Confirm::with_theme(&self.theme)
                .with_prompt("Add more items?")
                .default(true)
                .interact()?;
            if !more {
                break;
            }
        }

        let methods: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.as_str()).collect();
        let method = PaymentMethod::ALL[self.select("Payment method", &methods)?];
        let discount = self.fraction("Sale discount (0 - 1)")?;

        self.outcome(
            sale::complete_sale(&self.store, sale_id, method.as_str(), discount),
            |summary| render::sale_summary(summary, &self.config),
        );
        Ok(())
    }

    fn report_menu(&self) -> AppResult<()> {
        loop {
            match self.select("Reports", &REPORT_ITEMS)? {
                0 => self.show_report(ReportKind::Inventory)?,
                1 => self.show_report(ReportKind::Sales)?,
                2 => self.show_report(ReportKind::Employees)?,
                _ => return Ok(()),
            }
        }
    }

    fn show_report(&self, kind: ReportKind) -> AppResult<()> {
        println!("{}", render_report(&self.store, &self.config, kind)?);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Prompt helpers
    // -------------------------------------------------------------------------

    fn select(&self, prompt: &str, items: &[&str]) -> AppResult<usize> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        debug!(menu = prompt, choice = items[choice], "Menu selection");
        Ok(choice)
    }

    fn text(&self, prompt: &str) -> AppResult<String> {
        Ok(Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?)
    }

    fn optional_text(&self, prompt: &str) -> AppResult<String> {
        Ok(Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }

    fn id(&self, prompt: &str) -> AppResult<u64> {
        Ok(Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?)
    }

    fn money(&self, prompt: &str) -> AppResult<Money> {
        Ok(Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|m: &Money| -> Result<(), &str> {
                if m.is_negative() {
                    Err("amount must not be negative")
                } else {
                    Ok(())
                }
            })
            .interact_text()?)
    }

    fn non_negative(&self, prompt: &str) -> AppResult<i64> {
        Ok(Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|q: &i64| -> Result<(), &str> {
                if *q >= 0 {
                    Ok(())
                } else {
                    Err("must not be negative")
                }
            })
            .interact_text()?)
    }

    fn fraction(&self, prompt: &str) -> AppResult<f64> {
        Ok(Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(0.0)
            .validate_with(|d: &f64| -> Result<(), &str> {
                if (0.0..=1.0).contains(d) {
                    Ok(())
                } else {
                    Err("enter a value between 0 and 1")
                }
            })
            .interact_text()?)
    }

    /// Prints the success message, or `[CODE] message` on failure.
    fn outcome<T, F>(&self, result: Result<T, ApiError>, on_success: F)
    where
        F: FnOnce(&T) -> String,
    {
        match result {
            Ok(value) => println!("{}", on_success(&value)),
            Err(err) => println!("{err}"),
        }
    }
}

/// Renders one report as a table or JSON, depending on configuration.
pub fn render_report(
    store: &StoreState,
    config: &ConfigState,
    kind: ReportKind,
) -> AppResult<String> {
    let text = match (kind, config.json_output) {
        (ReportKind::Inventory, false) => render::inventory(&report::inventory_report(store), config),
        (ReportKind::Inventory, true) => render::json(&report::inventory_report(store))?,
        (ReportKind::Sales, false) => render::sales(&report::sales_report(store), config),
        (ReportKind::Sales, true) => render::json(&report::sales_report(store))?,
        (ReportKind::Employees, false) => {
            render::employees(&report::employee_report(store), config)
        }
        (ReportKind::Employees, true) => render::json(&report::employee_report(store))?,
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_render_report_table_and_json() {
        let store = StoreState::from_store(seed::demo_store().unwrap());
        let mut config = ConfigState::default();

        let table = render_report(&store, &config, ReportKind::Employees).unwrap();
        assert!(table.starts_with("ID"));
        assert!(table.contains("Store Manager"));

        config.json_output = true;
        let json = render_report(&store, &config, ReportKind::Sales).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["daily_revenue"], 0);
    }

    #[test]
    fn test_menu_tables_end_with_back_or_exit() {
        assert_eq!(MAIN_ITEMS.last(), Some(&"Exit"));
        for items in [&PRODUCT_ITEMS[..], &EMPLOYEE_ITEMS[..], &SALES_ITEMS[..], &REPORT_ITEMS[..]] {
            assert_eq!(items.last(), Some(&"Back"));
        }
    }
}
