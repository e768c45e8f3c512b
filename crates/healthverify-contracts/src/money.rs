//! Exact monetary amounts.
//!
//! Amounts are stored as integer minor units (cents) so that summing a cost
//! breakdown never accumulates floating-point error.  Prices arrive from
//! configuration in major units and are converted exactly once.
//!
//! Arithmetic saturates at the `i64` bounds rather than wrapping or
//! panicking.  Configured prices are capped at `Money::MAX_PRICE`, which
//! keeps any percentage of a single price exact.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A monetary amount in minor units of the configured currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// The largest amount `from_decimal` accepts, about 922 trillion major
    /// units.
    pub const MAX_PRICE: Money = Money((i64::MAX - 50) / 100);

    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Whole major units, e.g. `Money::from_major(1500)` is 1500.00.
    pub fn from_major(major: i64) -> Self {
        Self(major.saturating_mul(100))
    }

    /// Convert a configured decimal price to minor units, rounding to the
    /// nearest cent.
    ///
    /// Returns `None` for negative, NaN or infinite values and for anything
    /// above `MAX_PRICE`.
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        // `as` saturates, so out-of-range values land on i64::MAX.
        let minor = (value * 100.0).round() as i64;
        (minor <= Self::MAX_PRICE.0).then_some(Self(minor))
    }

    pub fn minor(&self) -> i64 {
        self.0
    }

    /// `percent`% of this amount, rounded half-up to the nearest cent.
    ///
    /// Computed in 128 bits; a result outside `i64` saturates.
    pub fn percent(&self, percent: u8) -> Self {
        let scaled = (i128::from(self.0) * i128::from(percent) + 50).div_euclid(100);
        Self(i64::try_from(scaled).unwrap_or(if scaled < 0 { i64::MIN } else { i64::MAX }))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
