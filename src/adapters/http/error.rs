//! API error mapping.
//!
//! Domain errors cross the HTTP boundary as a stable JSON shape carrying the
//! error code, message, and any capacity/status details the domain attached,
//! so clients can offer an immediate alternative on rejection.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::handlers::slot::CreateSlotError;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::join_request::JoinRequestError;
use crate::domain::slot::SlotError;

/// JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: HashMap::new(),
        }
    }
}

/// API error that converts any domain error into an HTTP response.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<SlotError> for ApiError {
    fn from(err: SlotError) -> Self {
        Self(err.into())
    }
}

impl From<JoinRequestError> for ApiError {
    fn from(err: JoinRequestError) -> Self {
        Self(err.into())
    }
}

impl From<CreateSlotError> for ApiError {
    fn from(err: CreateSlotError) -> Self {
        Self(err.into())
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat
        | ErrorCode::InvalidGuestData
        | ErrorCode::CapacityExceeded => StatusCode::BAD_REQUEST,

        ErrorCode::SlotNotFound
        | ErrorCode::JoinRequestNotFound
        | ErrorCode::BookingNotFound
        | ErrorCode::PackageNotFound => StatusCode::NOT_FOUND,

        ErrorCode::DuplicateSlot
        | ErrorCode::SlotFull
        | ErrorCode::SlotNotJoinable
        | ErrorCode::DuplicatePendingRequest
        | ErrorCode::RequestAlreadyResolved
        | ErrorCode::InvalidStateTransition => StatusCode::CONFLICT,

        ErrorCode::SlotClosed => StatusCode::GONE,

        ErrorCode::NotAuthorized => StatusCode::FORBIDDEN,

        ErrorCode::StorageError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = status_for(self.0.code);
        let body = ErrorResponse {
            code: self.0.code.to_string(),
            message: self.0.message,
            details: self.0.details,
        };
        (status, Json(body)).into_response()
    }
}
