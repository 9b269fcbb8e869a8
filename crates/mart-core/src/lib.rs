//! # mart-core: Pure Business Logic for Mart
//!
//! This crate is the **heart** of Mart. It owns the product catalog, the
//! employee roster, the sale history and the revenue counters, and enforces
//! the rules that tie a sale to live stock levels.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Mart Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Console (apps/console, `mart`)                  │   │
//! │  │    Menus ──► Prompts ──► Commands ──► Rendered tables          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ mart-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ catalog  │ │  roster  │ │   sale   │ │      store       │  │   │
//! │  │   │ Product  │ │ Employee │ │ LineItem │ │ RevenueLedger    │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  money   │ │  types   │ │validation│ │    reporting     │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • TYPED ERRORS                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money (integer cents) and Discount (basis points)
//! - [`types`] - Domain types (Product, Employee, LineItem, ids)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//! - [`catalog`] - Product catalog
//! - [`roster`] - Employee roster
//! - [`sale`] - Sale state machine
//! - [`store`] - Orchestrator owning everything above
//! - [`reporting`] - Read-only report projections
//!
//! ## Example Usage
//!
//! ```rust
//! use mart_core::{Discount, Money, PaymentMethod, Store};
//!
//! let mut store = Store::new();
//! let milk = store
//!     .add_product("Milk", Money::from_cents(1000), 5, "Dairy", "Acme")
//!     .unwrap();
//!
//! let sale = store.create_sale();
//! store.add_to_sale(sale, milk, 3).unwrap();
//!
//! let total = store
//!     .complete_sale(sale, PaymentMethod::Cash, Discount::from_bps(1000).unwrap())
//!     .unwrap();
//! assert_eq!(total.cents(), 2700);
//! assert_eq!(store.revenue().daily().cents(), 2700);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod reporting;
pub mod roster;
pub mod sale;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::ProductCatalog;
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use money::{Discount, Money};
pub use reporting::{
    employee_report, inventory_report, sales_report, EmployeeReport, EmployeeRow, InventoryReport,
    InventoryRow, SalesReport,
};
pub use roster::EmployeeRoster;
pub use sale::Sale;
pub use store::{RevenueLedger, Store};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product or employee name.
pub const MAX_NAME_LEN: usize = 200;
