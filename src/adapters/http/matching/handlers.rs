//! HTTP handlers for matching endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::matching::MatchSlotsQuery;

use super::super::error::ApiError;
use super::super::state::AppState;
use super::dto::{MatchCandidateResponse, MatchQueryRequest, MatchResultsResponse};

/// POST /api/matches - Ranked slot recommendations for a solo traveler
///
/// Anonymous: browsing recommendations needs no account.
pub async fn match_slots(
    State(state): State<AppState>,
    Json(request): Json<MatchQueryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (prefs, limit) = request.into_preferences()?;

    let handler = state.match_slots_handler();
    let ranked = handler.handle(MatchSlotsQuery { prefs, limit }).await?;

    let response = MatchResultsResponse {
        results: ranked.into_iter().map(MatchCandidateResponse::from).collect(),
    };
    Ok(Json(response))
}
