//! Whole-peso price representation.
//!
//! The menu is priced in whole Argentine pesos, so a price is a plain
//! unsigned integer with no minor unit. A price of zero marks an item that
//! is shown on the menu but cannot be ordered online.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price in whole pesos.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The "not orderable online" sentinel.
    pub const ZERO: Self = Self(0);

    /// Create a new price.
    #[must_use]
    pub const fn new(pesos: u64) -> Self {
        Self(pesos)
    }

    /// Get the amount in pesos.
    #[must_use]
    pub const fn pesos(self) -> u64 {
        self.0
    }

    /// Whether an item at this price can be added to a cart.
    #[must_use]
    pub const fn is_orderable(self) -> bool {
        self.0 > 0
    }

    /// Price of `quantity` units, saturating at `u64::MAX`.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// Sum of two prices, saturating at `u64::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl From<u64> for Price {
    fn from(pesos: u64) -> Self {
        Self(pesos)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Formats as `$ 13.300`, using a dot as the thousands separator.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        write!(f, "$ {grouped}")
    }
}
