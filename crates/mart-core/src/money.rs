//! # Money Module
//!
//! Provides the `Money` type for monetary values and the `Discount` type for
//! the fractions applied to them.
//!
//! ## Representation
//! - `Money`: signed integer cents. Sums are exact, so the revenue ledger
//!   never drifts no matter how many sales it absorbs.
//! - `Discount`: basis points, `0..=10_000`. `Money(1000)` at
//!   `Discount(1000)` is `Money(900)`.
//! - Rounding happens in exactly one place, [`Money::apply_discount`].
//! - Line totals, subtotals and revenue go through the `checked_*` methods.
//!   An amount past [`Money::MAX`] is an error, not a wrapped negative.
//!
//! ## Usage
//! ```rust
//! use mart_core::money::{Discount, Money};
//!
//! let price = Money::from_cents(1000);                 // $10.00
//! let line = price.checked_mul_quantity(3).unwrap();   // $30.00
//! let total = line.apply_discount(Discount::from_fraction(0.10).unwrap());
//! assert_eq!(total.cents(), 2700);
//!
//! // Sums that would not fit in i64 are refused, never wrapped.
//! assert!(Money::MAX.checked_add(Money::from_cents(1)).is_none());
//!
//! // Console input is parsed from text, never from floats.
//! let typed: Money = "10.99".parse().unwrap();
//! assert_eq!(typed.cents(), 1099);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};

/// Basis points in a whole (100%).
pub const BPS_SCALE: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Product.price ──► discounted_price ──► LineItem.unit_price            │
/// │                                              │                          │
/// │                                              ▼                          │
/// │  Sale.subtotal ──► apply sale discount ──► total ──► RevenueLedger     │
/// │                                                                         │
/// │  Employee.salary ──► Employee report                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Largest representable amount.
    pub const MAX: Money = Money(i64::MAX);

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use mart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, or `None` if the product overflows.
    ///
    /// ## Example
    /// ```rust
    /// use mart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.checked_mul_quantity(3).unwrap();
    /// assert_eq!(line_total.cents(), 897); // $8.97
    ///
    /// assert!(Money::MAX.checked_mul_quantity(2).is_none());
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` if the sum overflows.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// The discount amount is rounded half up: `(amount × bps + 5000) / 10000`,
    /// then subtracted. A zero discount returns the amount unchanged and a full
    /// discount returns zero.
    ///
    /// ## Example
    /// ```rust
    /// use mart_core::money::{Discount, Money};
    ///
    /// let subtotal = Money::from_cents(10000); // $100.00
    /// let off = Discount::from_bps(1000).unwrap(); // 10% off
    /// assert_eq!(subtotal.apply_discount(off).cents(), 9000); // $90.00
    /// ```
    pub fn apply_discount(&self, discount: Discount) -> Money {
        // i128 keeps large amounts from overflowing before the division
        let discount_amount =
            (self.0 as i128 * discount.bps() as i128 + 5000) / BPS_SCALE as i128;
        Money::from_cents(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$10.99`.
///
/// ## Note
/// The console formats with its configured currency symbol instead; this is
/// for logs and error messages.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Parses a decimal amount such as `10`, `10.5` or `10.99` into cents.
///
/// At most two fractional digits are accepted, so nothing is ever rounded
/// silently.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("expected a number like 10.99"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid("expected a number like 10.99"));
        }
        if frac.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount is too large"))?
        };
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("expected digits"))? * 10,
            _ => frac.parse().map_err(|_| invalid("expected digits"))?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Discount
// =============================================================================

/// A discount fraction in [0, 1], stored in basis points.
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 1000 bps = 10% off.
/// A `Discount` can only be built through the checked constructors, so an
/// out-of-range fraction never reaches a product or a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Discount(u32);

impl Discount {
    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        Discount(0)
    }

    /// Creates a discount from basis points (0..=10000).
    pub fn from_bps(bps: u32) -> CoreResult<Self> {
        if bps > BPS_SCALE {
            return Err(CoreError::InvalidDiscount {
                value: (bps as f64 / BPS_SCALE as f64).to_string(),
            });
        }
        Ok(Discount(bps))
    }

    /// Creates a discount from a fraction such as `0.10`.
    ///
    /// Rounds to the nearest basis point. NaN, infinities and anything
    /// outside [0, 1] are rejected.
    ///
    /// ## Example
    /// ```rust
    /// use mart_core::money::Discount;
    ///
    /// assert_eq!(Discount::from_fraction(0.125).unwrap().bps(), 1250);
    /// assert!(Discount::from_fraction(1.5).is_err());
    /// assert!(Discount::from_fraction(-0.1).is_err());
    /// ```
    pub fn from_fraction(fraction: f64) -> CoreResult<Self> {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(CoreError::InvalidDiscount {
                value: fraction.to_string(),
            });
        }
        Ok(Discount((fraction * BPS_SCALE as f64).round() as u32))
    }

    /// Returns the discount in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the discount as a fraction (for display only).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / BPS_SCALE as f64
    }

    /// Checks if this is no discount at all.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Discount {
    fn default() -> Self {
        Discount::zero()
    }
}

/// Display shows the discount as a percentage, e.g. `12.50%`.
impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
