//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SlotRegistry` - capacity authority; per-slot serialized mutations
//! - `JoinRequestStore` - join request persistence with pending-uniqueness
//! - `BookingStore` - boundary to the booking/payment collaborator
//! - `PackageCatalog` - read-only package lookup
//! - `NotificationDispatcher` - outbound domain events

mod booking_store;
mod join_request_store;
mod notification_dispatcher;
mod package_catalog;
mod slot_registry;

pub use booking_store::{Booking, BookingStore, PaymentStatus};
pub use join_request_store::JoinRequestStore;
pub use notification_dispatcher::NotificationDispatcher;
pub use package_catalog::PackageCatalog;
pub use slot_registry::{NewSlot, SlotRegistry};
