//! Pricing domain module.
//!
//! Computes booking amounts from guest age bands and a package price table.
//!
//! # Module Structure
//!
//! - `calculator` - Age band classification and amount computation
//! - `price_table` - Per-band package prices

mod calculator;
mod price_table;

pub use calculator::{AgeBand, GuestDetail, PricingCalculator, PricingError};
pub use price_table::PriceTable;
