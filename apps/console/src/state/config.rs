//! # Configuration State
//!
//! Console settings resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--store-name`, `--currency-symbol`)
//! 2. Environment variables (`MART_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup, so no lock.

use mart_core::Money;
use serde::{Deserialize, Serialize};

pub const ENV_STORE_NAME: &str = "MART_STORE_NAME";
pub const ENV_CURRENCY_SYMBOL: &str = "MART_CURRENCY_SYMBOL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the menu banner
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Render reports as JSON instead of tables
    pub json_output: bool,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Mart".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            json_output: false,
        }
    }
}

impl ConfigState {
    /// Defaults overlaid with `MART_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] but reading from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup(ENV_STORE_NAME).filter(|v| !v.trim().is_empty()) {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Applies command-line overrides on top of the current values.
    pub fn with_overrides(
        mut self,
        store_name: Option<String>,
        currency_symbol: Option<String>,
        json_output: bool,
    ) -> Self {
        if let Some(name) = store_name {
            self.store_name = name;
        }
        if let Some(symbol) = currency_symbol {
            self.currency_symbol = symbol;
        }
        self.json_output = json_output;
        self
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}
