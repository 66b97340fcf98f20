//! Event dispatch adapters.

mod in_memory;

pub use in_memory::InMemoryNotificationBus;
