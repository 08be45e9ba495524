//! Fixed-precision price value object.
//!
//! Prices are stored as an integer count of minor units (hundredths) and
//! always encode to a canonical decimal string with exactly two fractional
//! digits, e.g. `107.00`. The same encoding is written to the cache and
//! returned to API clients, so a cached price and a freshly fetched price
//! have an identical wire shape.

use serde::{Serialize, Serializer};
use std::fmt::{self, Display};

/// Number of fractional digits in the canonical encoding.
pub const PRICE_SCALE: u32 = 2;

const MINOR_PER_UNIT: i64 = 10_i64.pow(PRICE_SCALE);

/// A decimal price with two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price {
    minor_units: i64,
}

impl Price {
    /// Creates a price from a count of minor units (`10_750` is `107.50`).
    #[must_use]
    pub const fn from_minor_units(minor_units: i64) -> Self {
        Self { minor_units }
    }

    /// Creates a price from whole units, returning `None` on overflow.
    #[must_use]
    pub const fn checked_from_units(units: i64) -> Option<Self> {
        match units.checked_mul(MINOR_PER_UNIT) {
            Some(minor_units) => Some(Self { minor_units }),
            None => None,
        }
    }

    /// Returns the price as a count of minor units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// Returns the canonical string encoding.
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minor_units < 0 { "-" } else { "" };
        let abs = self.minor_units.unsigned_abs();
        let per_unit = MINOR_PER_UNIT.unsigned_abs();
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            abs / per_unit,
            abs % per_unit,
            width = PRICE_SCALE as usize
        )
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
