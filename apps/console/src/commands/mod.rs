//! # Commands Module
//!
//! The console's call interface. Menus collect input, then call one of these
//! functions; each locks the store once, delegates to `mart-core`, and maps
//! failures into [`ApiError`].
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  product.rs   add / update / remove / discount / adjust stock / list   │
//! │  employee.rs  add / update / remove / list                             │
//! │  sale.rs      create sale / add to sale / complete sale / get sale     │
//! │  report.rs    inventory / sales / employee reports                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod employee;
pub mod product;
pub mod report;
pub mod sale;

use mart_core::CoreError;
use tracing::warn;

use crate::error::ApiError;

/// Logs a rejected command and converts the core error.
pub(crate) fn rejected(command: &'static str, err: CoreError) -> ApiError {
    let kind = err.kind();
    let api_err = ApiError::from(err);
    warn!(command, ?kind, code = %api_err.code, message = %api_err.message, "Command rejected");
    api_err
}
