//! Fine amounts for overdue returns
//!
//! Fines are whole units (no fractional currency), stored as i64.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed fine charged per whole overdue day
pub const FINE_RATE: Fine = Fine::from_units(10);

/// A fine amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fine(i64);

impl Fine {
    /// Create a fine from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// A zero fine
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Check if the fine is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Fine owed for a number of overdue days at this daily rate
    pub fn for_days(&self, days: i64) -> Self {
        Self(self.0.saturating_mul(days.max(0)))
    }
}

impl fmt::Display for Fine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rs {}", self.0)
    }
}
