//! Axum router configuration for join request endpoints.

use axum::{routing::post, Router};

use super::super::state::AppState;
use super::handlers::{cancel_join_request, respond_to_join_request, submit_join_request};

/// Create the join request API router.
///
/// # Routes
///
/// - `POST /` - File a join request (requires authentication)
/// - `POST /:id/respond` - Creator approves or declines
/// - `POST /:id/cancel` - Requester withdraws
pub fn join_request_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_join_request))
        .route("/:id/respond", post(respond_to_join_request))
        .route("/:id/cancel", post(cancel_join_request))
}
