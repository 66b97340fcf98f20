//! Axum router configuration for matching endpoints.

use axum::{routing::post, Router};

use super::super::state::AppState;
use super::handlers::match_slots;

/// Create the matching API router.
///
/// # Routes
///
/// - `POST /` - Ranked slot recommendations
pub fn matching_routes() -> Router<AppState> {
    Router::new().route("/", post(match_slots))
}
