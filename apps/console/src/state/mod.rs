//! # State Module
//!
//! Two focused state types instead of one `AppState`:
//!
//! ```text
//! ┌──────────────────────────────┐ ┌──────────────────────────────┐
//! │  StoreState                  │ │  ConfigState                 │
//! │  • Arc<Mutex<Store>>         │ │  • store name                │
//! │  • catalog, roster, sales,   │ │  • currency symbol           │
//! │    revenue                   │ │  • JSON output flag          │
//! └──────────────────────────────┘ └──────────────────────────────┘
//! ```
//!
//! Commands take only the state they need.

mod config;
mod store;

pub use config::ConfigState;
pub use store::StoreState;
