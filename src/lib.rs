//! Trip Pool - Slot allocation and matching engine for shared-capacity
//! group trips.
//!
//! Independent travelers open capacity-bounded slots for a package, date and
//! destination; solo travelers discover them through a weighted match engine
//! and join through a creator-approved request workflow that never overbooks.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
