//! HTTP adapter - axum REST surface over the application layer.
//!
//! # Module Structure
//!
//! - `slots` - slot creation, detail, member removal
//! - `join_requests` - submit / respond / cancel workflow
//! - `matching` - ranked slot recommendations
//! - `auth` - actor extraction (canonical user id)
//! - `error` - domain error to HTTP status mapping
//! - `state` - shared AppState and handler factories

pub mod auth;
pub mod error;
pub mod join_requests;
pub mod matching;
pub mod slots;
pub mod state;

use axum::Router;

pub use auth::AuthenticatedUser;
pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

/// Assemble the complete API router.
///
/// # Example
///
/// ```ignore
/// let app = api_router().with_state(app_state);
/// axum::serve(listener, app).await?;
/// ```
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/slots", slots::slot_routes())
        .nest("/api/join-requests", join_requests::join_request_routes())
        .nest("/api/matches", matching::matching_routes())
}
