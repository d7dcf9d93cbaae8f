//! Currency amounts in minor units.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of money stored as whole cents.
///
/// `Display` renders the major/minor split without a currency symbol
/// (`250` cents renders as `2.50`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Render with a leading currency symbol, e.g. `$5.00`.
    pub fn with_symbol(self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
