//! Shared application state for HTTP handlers.

use std::sync::Arc;

use crate::application::handlers::join_request::{
    CancelJoinRequestHandler, RespondToJoinRequestHandler, SubmitJoinRequestHandler,
};
use crate::application::handlers::matching::MatchSlotsHandler;
use crate::application::handlers::slot::{
    CreateSlotHandler, GetSlotHandler, RemoveBookingHandler,
};
use crate::config::{MatchingConfig, SlotConfig};
use crate::domain::matching::MatchEngine;
use crate::ports::{
    BookingStore, JoinRequestStore, NotificationDispatcher, PackageCatalog, SlotRegistry,
};

/// Shared application state containing all dependencies.
///
/// Cloned per request; dependencies are Arc-wrapped for cheap sharing.
#[derive(Clone)]
pub struct AppState {
    pub slot_registry: Arc<dyn SlotRegistry>,
    pub request_store: Arc<dyn JoinRequestStore>,
    pub booking_store: Arc<dyn BookingStore>,
    pub package_catalog: Arc<dyn PackageCatalog>,
    pub dispatcher: Arc<dyn NotificationDispatcher>,
    pub slots_config: SlotConfig,
    pub matching_config: MatchingConfig,
}

impl AppState {
    /// Create handlers on demand from the shared state.
    pub fn create_slot_handler(&self) -> CreateSlotHandler {
        CreateSlotHandler::new(
            self.slot_registry.clone(),
            self.booking_store.clone(),
            self.package_catalog.clone(),
            self.dispatcher.clone(),
            self.slots_config.default_max_capacity,
            self.slots_config.max_capacity_limit,
        )
    }

    pub fn get_slot_handler(&self) -> GetSlotHandler {
        GetSlotHandler::new(self.slot_registry.clone())
    }

    pub fn remove_booking_handler(&self) -> RemoveBookingHandler {
        RemoveBookingHandler::new(
            self.slot_registry.clone(),
            self.booking_store.clone(),
            self.dispatcher.clone(),
        )
    }

    pub fn submit_join_request_handler(&self) -> SubmitJoinRequestHandler {
        SubmitJoinRequestHandler::new(
            self.slot_registry.clone(),
            self.request_store.clone(),
            self.booking_store.clone(),
            self.dispatcher.clone(),
        )
    }

    pub fn respond_to_join_request_handler(&self) -> RespondToJoinRequestHandler {
        RespondToJoinRequestHandler::new(
            self.slot_registry.clone(),
            self.request_store.clone(),
            self.booking_store.clone(),
            self.dispatcher.clone(),
        )
    }

    pub fn cancel_join_request_handler(&self) -> CancelJoinRequestHandler {
        CancelJoinRequestHandler::new(self.request_store.clone(), self.dispatcher.clone())
    }

    pub fn match_slots_handler(&self) -> MatchSlotsHandler {
        MatchSlotsHandler::new(
            self.slot_registry.clone(),
            self.package_catalog.clone(),
            MatchEngine::default(),
            self.matching_config.default_limit,
            self.matching_config.max_limit,
        )
    }
}

#[cfg(test)]
impl AppState {
    /// State backed entirely by fresh in-memory adapters.
    pub fn in_memory_for_tests() -> Self {
        use crate::adapters::{
            InMemoryBookingStore, InMemoryJoinRequestStore, InMemoryNotificationBus,
            InMemoryPackageCatalog, InMemorySlotRegistry,
        };

        Self {
            slot_registry: Arc::new(InMemorySlotRegistry::new()),
            request_store: Arc::new(InMemoryJoinRequestStore::new()),
            booking_store: Arc::new(InMemoryBookingStore::new()),
            package_catalog: Arc::new(InMemoryPackageCatalog::with_demo_packages()),
            dispatcher: Arc::new(InMemoryNotificationBus::new()),
            slots_config: SlotConfig::default(),
            matching_config: MatchingConfig::default(),
        }
    }
}
