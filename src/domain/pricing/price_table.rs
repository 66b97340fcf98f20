//! Age-banded price table for a tour package.

use serde::{Deserialize, Serialize};

use super::AgeBand;

/// Per-person prices for a package, in minor currency units (cents).
///
/// Monetary values are stored as i64 cents, never floats. The infant
/// price is optional; packages that omit it travel infants for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Price per adult (age > 18).
    pub adult: i64,

    /// Price per child (age 5-18).
    pub child: i64,

    /// Price per infant (age < 5). Defaults to 0 when absent.
    #[serde(default)]
    pub infant: Option<i64>,
}

impl PriceTable {
    /// Creates a price table with an explicit infant price.
    pub fn new(adult: i64, child: i64, infant: Option<i64>) -> Self {
        Self {
            adult,
            child,
            infant,
        }
    }

    /// Returns the per-person price for an age band.
    pub fn price_for(&self, band: AgeBand) -> i64 {
        match band {
            AgeBand::Adult => self.adult,
            AgeBand::Child => self.child,
            AgeBand::Infant => self.infant.unwrap_or(0),
        }
    }
}
