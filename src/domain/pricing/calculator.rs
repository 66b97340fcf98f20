//! Booking amount computation from guest age bands.

use serde::{Deserialize, Serialize};

use super::PriceTable;

/// Age classification used for per-guest pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// Age > 18.
    Adult,
    /// Age 5-18 inclusive.
    Child,
    /// Age < 5.
    Infant,
}

impl AgeBand {
    /// Classifies an age into a band.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidGuestData` for negative ages.
    pub fn for_age(age: i32) -> Result<Self, PricingError> {
        if age < 0 {
            return Err(PricingError::InvalidGuestData {
                reason: format!("guest age cannot be negative, got {}", age),
            });
        }
        Ok(if age < 5 {
            AgeBand::Infant
        } else if age <= 18 {
            AgeBand::Child
        } else {
            AgeBand::Adult
        })
    }
}

/// One guest covered by a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetail {
    /// Guest name, when the booking collaborator supplies one.
    #[serde(default)]
    pub name: Option<String>,

    /// Guest age in years at departure.
    pub age: i32,
}

impl GuestDetail {
    /// Creates an unnamed guest of the given age.
    pub fn aged(age: i32) -> Self {
        Self { name: None, age }
    }
}

/// Errors from booking amount computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid guest data: {reason}")]
    InvalidGuestData { reason: String },
}

/// Calculator for booking amounts from guest lists and package price tables.
///
/// Stateless and side-effect free.
pub struct PricingCalculator;

impl PricingCalculator {
    /// Computes the total booking amount for a list of guests.
    ///
    /// Each guest pays the per-person price of their age band; the total is
    /// the sum across all guests. An empty guest list prices to zero.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidGuestData` if any guest has a negative
    /// age. No partial amount is produced in that case.
    pub fn compute_amount(guests: &[GuestDetail], table: &PriceTable) -> Result<i64, PricingError> {
        let mut total: i64 = 0;
        for guest in guests {
            let band = AgeBand::for_age(guest.age)?;
            total += table.price_for(band);
        }
        Ok(total)
    }
}
