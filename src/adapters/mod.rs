//! Adapters - Implementations of the ports.
//!
//! # Module Organization
//!
//! - `memory` - In-memory stores (production store for slot state, test
//!   doubles for the external collaborators)
//! - `events` - Notification dispatch adapters
//! - `http` - axum REST surface

pub mod events;
pub mod http;
pub mod memory;

pub use events::InMemoryNotificationBus;
pub use memory::{
    InMemoryBookingStore, InMemoryJoinRequestStore, InMemoryPackageCatalog,
    InMemorySlotRegistry,
};
