//! HTTP handlers for join request endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::handlers::join_request::{
    CancelJoinRequestCommand, RespondToJoinRequestCommand, SubmitJoinRequestCommand,
};
use crate::domain::foundation::{
    BookingId, DomainError, ErrorCode, JoinRequestId, SlotId,
};

use super::super::auth::AuthenticatedUser;
use super::super::error::ApiError;
use super::super::slots::SlotResponse;
use super::super::state::AppState;
use super::dto::{JoinRequestResponse, RespondToJoinRequestRequest, SubmitJoinRequestRequest};

fn parse_request_id(raw: &str) -> Result<JoinRequestId, ApiError> {
    raw.parse::<JoinRequestId>().map_err(|_| {
        ApiError::from(DomainError::new(
            ErrorCode::InvalidFormat,
            format!("'{}' is not a valid join request id", raw),
        ))
    })
}

/// Response pairing a request with the slot state it was judged against.
#[derive(Debug, Clone, Serialize)]
pub struct JoinRequestWithSlotResponse {
    pub request: JoinRequestResponse,
    pub slot: SlotResponse,
}

/// POST /api/join-requests - File a request to join a slot
pub async fn submit_join_request(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<SubmitJoinRequestRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SubmitJoinRequestCommand {
        slot_id: request.slot_id.parse::<SlotId>().map_err(|_| {
            ApiError::from(DomainError::new(
                ErrorCode::InvalidFormat,
                format!("'{}' is not a valid slot id", request.slot_id),
            ))
        })?,
        booking_id: request.booking_id.parse::<BookingId>().map_err(|_| {
            ApiError::from(DomainError::new(
                ErrorCode::InvalidFormat,
                format!("'{}' is not a valid booking id", request.booking_id),
            ))
        })?,
        requester_id: user.user_id,
        message: request.message,
    };

    let handler = state.submit_join_request_handler();
    let result = handler.handle(cmd).await?;

    let response = JoinRequestWithSlotResponse {
        request: JoinRequestResponse::from(result.request),
        slot: SlotResponse::from(result.slot),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/join-requests/:id/respond - Creator approves or declines
///
/// An approve that lost the capacity race returns 200 with the request in
/// `declined` status and a recorded reason, not an error.
pub async fn respond_to_join_request(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(request_id): Path<String>,
    Json(request): Json<RespondToJoinRequestRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = RespondToJoinRequestCommand {
        request_id: parse_request_id(&request_id)?,
        acting_user_id: user.user_id,
        decision: request.decision.into(),
        message: request.message,
    };

    let handler = state.respond_to_join_request_handler();
    let result = handler.handle(cmd).await?;

    let response = JoinRequestWithSlotResponse {
        request: JoinRequestResponse::from(result.request),
        slot: SlotResponse::from(result.slot),
    };
    Ok(Json(response))
}

/// POST /api/join-requests/:id/cancel - Requester withdraws
pub async fn cancel_join_request(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(request_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CancelJoinRequestCommand {
        request_id: parse_request_id(&request_id)?,
        acting_user_id: user.user_id,
    };

    let handler = state.cancel_join_request_handler();
    let result = handler.handle(cmd).await?;

    Ok(Json(JoinRequestResponse::from(result.request)))
}
