//! Axum router configuration for slot endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::super::state::AppState;
use super::handlers::{create_slot, get_slot, list_pending_join_requests, remove_booking};

/// Create the slot API router.
///
/// # Routes
///
/// - `POST /` - Open a new slot (requires authentication)
/// - `GET /:id` - Authoritative slot capacity and status
/// - `GET /:id/join-requests` - Pending requests (creator only)
/// - `DELETE /:id/bookings/:booking_id` - Release a booking's seats
pub fn slot_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_slot))
        .route("/:id", get(get_slot))
        .route("/:id/join-requests", get(list_pending_join_requests))
        .route("/:id/bookings/:booking_id", delete(remove_booking))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_routes_creates_router() {
        let router = slot_routes();
        let _: Router<()> = router.with_state(AppState::in_memory_for_tests());
    }
}
