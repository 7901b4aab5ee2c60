//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Pricing 100 pages at 0.07 in floating point:                           │
//! │    0.07 * 100 = 7.000000000000001  ❌ WRONG!                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    7 cents * 100 = 700 cents = 7.00                                     │
//! │    Every printing rate is a whole number of cents, so every total      │
//! │    is exact and the 2-decimal display needs no rounding.               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use printworks_core::money::Money;
//!
//! let per_page = Money::from_cents(7); // 0.07
//! let base = per_page.checked_mul_count(100).unwrap();
//! assert_eq!(base.to_string(), "7.00");
//! ```
//!
//! The currency is whatever the shop charges in; `Money` only tracks the
//! amount, so `Display` prints no symbol.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i128 (signed)**: a rate times two `u32` counts always fits, so any
///   order a customer can submit has an exact total
/// - **Single field tuple struct**: serializes as a bare integer
/// - **No unchecked operators**: arithmetic goes through `checked_*`, so
///   nothing wraps silently
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct Money(i128);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use printworks_core::money::Money;
    ///
    /// let cover = Money::from_cents(600); // 6.00
    /// assert_eq!(cover.cents(), 600);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i128) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use printworks_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(22, 50).cents(), 2250);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i128, minor: i128) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i128 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i128 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i128 {
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

    /// Multiplies by a count (pages, copies), returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use printworks_core::money::Money;
    ///
    /// let hard_cover = Money::from_cents(600);
    /// assert_eq!(hard_cover.checked_mul_count(3), Some(Money::from_cents(1800)));
    /// assert_eq!(Money::from_cents(i128::MAX).checked_mul_count(2), None);
    /// ```
    #[inline]
    pub fn checked_mul_count(self, count: u32) -> Option<Self> {
        self.0.checked_mul(i128::from(count)).map(Money)
    }

    /// Adds two amounts, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use printworks_core::money::Money;
    ///
    /// let total = Money::from_cents(900).checked_add(Money::from_cents(300));
    /// assert_eq!(total, Some(Money::from_cents(1200)));
    /// ```
    #[inline]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two-decimal amount without a currency symbol, e.g. `22.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Accepts a bare integer in any width the format offers. TOML only has
/// 64-bit integers, so this can't forward to `deserialize_i128`.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CentsVisitor)
    }
}

struct CentsVisitor;

impl<'de> Visitor<'de> for CentsVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer amount in cents")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(Money(i128::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money(i128::from(v)))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Money, E> {
        Ok(Money(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Money, E> {
        i128::try_from(v)
            .map(Money)
            .map_err(|_| E::invalid_value(de::Unexpected::Other("u128 above i128::MAX"), &self))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
