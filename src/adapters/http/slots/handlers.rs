//! HTTP handlers for slot endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::slot::{
    CreateSlotCommand, GetSlotQuery, RemoveBookingCommand,
};
use crate::domain::foundation::{
    BookingId, DestinationId, DomainError, ErrorCode, PackageId, SlotId, TripDate,
    ValidationError,
};
use crate::domain::join_request::JoinRequestError;
use crate::ports::{JoinRequestStore, SlotRegistry};

use super::super::auth::AuthenticatedUser;
use super::super::error::ApiError;
use super::super::join_requests::JoinRequestResponse;
use super::super::state::AppState;
use super::dto::{CreateSlotRequest, CreateSlotResponse, SlotResponse};

fn parse_slot_id(raw: &str) -> Result<SlotId, ApiError> {
    raw.parse::<SlotId>().map_err(|_| {
        ApiError::from(DomainError::new(
            ErrorCode::InvalidFormat,
            format!("'{}' is not a valid slot id", raw),
        ))
    })
}

fn parse_booking_id(raw: &str) -> Result<BookingId, ApiError> {
    raw.parse::<BookingId>().map_err(|_| {
        ApiError::from(DomainError::new(
            ErrorCode::InvalidFormat,
            format!("'{}' is not a valid booking id", raw),
        ))
    })
}

/// POST /api/slots - Open a new slot seeded with the creator's booking
pub async fn create_slot(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateSlotRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = CreateSlotCommand {
        package_id: PackageId::new(request.package_id)
            .map_err(|e: ValidationError| ApiError::from(DomainError::from(e)))?,
        destination_id: DestinationId::new(request.destination_id)
            .map_err(|e: ValidationError| ApiError::from(DomainError::from(e)))?,
        destination_name: request.destination_name,
        trip_date: request
            .trip_date
            .parse::<TripDate>()
            .map_err(|e| ApiError::from(DomainError::from(e)))?,
        creator_id: user.user_id,
        guest_details: request.guest_details,
        max_capacity: request.max_capacity,
    };

    let handler = state.create_slot_handler();
    let result = handler.handle(cmd).await?;

    let response = CreateSlotResponse::new(result.slot, &result.seed_booking, result.amount);
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/slots/:id - Authoritative slot capacity and status
pub async fn get_slot(
    State(state): State<AppState>,
    Path(slot_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let slot_id = parse_slot_id(&slot_id)?;

    let handler = state.get_slot_handler();
    let slot = handler.handle(GetSlotQuery { slot_id }).await?;

    Ok(Json(SlotResponse::from(slot)))
}

/// GET /api/slots/:id/join-requests - Pending requests for the creator
pub async fn list_pending_join_requests(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(slot_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let slot_id = parse_slot_id(&slot_id)?;

    // Only the slot creator reads the request inbox.
    let slot = state.slot_registry.get(&slot_id).await?;
    if slot.creator_id != user.user_id {
        return Err(ApiError::from(JoinRequestError::not_authorized()));
    }

    let pending = state.request_store.list_pending_for_slot(&slot_id).await?;
    let response: Vec<JoinRequestResponse> =
        pending.into_iter().map(JoinRequestResponse::from).collect();
    Ok(Json(response))
}

/// DELETE /api/slots/:id/bookings/:booking_id - Release a booking's seats
pub async fn remove_booking(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path((slot_id, booking_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = RemoveBookingCommand {
        slot_id: parse_slot_id(&slot_id)?,
        booking_id: parse_booking_id(&booking_id)?,
    };

    let handler = state.remove_booking_handler();
    let result = handler.handle(cmd).await?;

    Ok(Json(SlotResponse::from(result.slot)))
}
