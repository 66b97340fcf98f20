//! Join request error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | SlotNotJoinable | 409 |
//! | DuplicatePending | 409 |
//! | AlreadyResolved | 409 |
//! | NotAuthorized | 403 |
//! | ValidationFailed | 400 |
//! | Slot | per SlotError |
//! | Infrastructure | 500 |

use crate::domain::foundation::{
    BookingId, DomainError, ErrorCode, JoinRequestId, SlotId,
};
use crate::domain::slot::{SlotError, SlotStatus};

use super::JoinRequestStatus;

/// Join-workflow errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinRequestError {
    /// Request was not found.
    NotFound(JoinRequestId),

    /// The slot cannot accept this request right now. Carries the
    /// authoritative capacity and status observed at rejection.
    SlotNotJoinable {
        slot_id: SlotId,
        status: SlotStatus,
        available: u32,
        requested: u32,
    },

    /// A Pending request already exists for this slot and booking.
    DuplicatePending {
        slot_id: SlotId,
        booking_id: BookingId,
    },

    /// The request has already reached a terminal state.
    AlreadyResolved {
        request_id: JoinRequestId,
        status: JoinRequestStatus,
    },

    /// The acting user may not perform this transition.
    NotAuthorized,

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// A slot operation failed underneath the workflow.
    Slot(SlotError),

    /// Infrastructure error.
    Infrastructure(String),
}

impl JoinRequestError {
    pub fn not_found(id: JoinRequestId) -> Self {
        JoinRequestError::NotFound(id)
    }

    pub fn slot_not_joinable(
        slot_id: SlotId,
        status: SlotStatus,
        available: u32,
        requested: u32,
    ) -> Self {
        JoinRequestError::SlotNotJoinable {
            slot_id,
            status,
            available,
            requested,
        }
    }

    pub fn duplicate_pending(slot_id: SlotId, booking_id: BookingId) -> Self {
        JoinRequestError::DuplicatePending {
            slot_id,
            booking_id,
        }
    }

    pub fn already_resolved(request_id: JoinRequestId, status: JoinRequestStatus) -> Self {
        JoinRequestError::AlreadyResolved { request_id, status }
    }

    pub fn not_authorized() -> Self {
        JoinRequestError::NotAuthorized
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        JoinRequestError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        JoinRequestError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            JoinRequestError::NotFound(_) => ErrorCode::JoinRequestNotFound,
            JoinRequestError::SlotNotJoinable { .. } => ErrorCode::SlotNotJoinable,
            JoinRequestError::DuplicatePending { .. } => ErrorCode::DuplicatePendingRequest,
            JoinRequestError::AlreadyResolved { .. } => ErrorCode::RequestAlreadyResolved,
            JoinRequestError::NotAuthorized => ErrorCode::NotAuthorized,
            JoinRequestError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            JoinRequestError::Slot(err) => err.code(),
            JoinRequestError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            JoinRequestError::NotFound(id) => format!("Join request not found: {}", id),
            JoinRequestError::SlotNotJoinable {
                slot_id,
                status,
                available,
                requested,
            } => format!(
                "Slot {} cannot take a request for {} guests ({:?}, {} seats remain)",
                slot_id, requested, status, available
            ),
            JoinRequestError::DuplicatePending {
                slot_id,
                booking_id,
            } => format!(
                "A pending request already exists for booking {} on slot {}",
                booking_id, slot_id
            ),
            JoinRequestError::AlreadyResolved { request_id, status } => format!(
                "Join request {} was already resolved as {:?}",
                request_id, status
            ),
            JoinRequestError::NotAuthorized => "Permission denied".to_string(),
            JoinRequestError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            JoinRequestError::Slot(err) => err.message(),
            JoinRequestError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for JoinRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for JoinRequestError {}

impl From<SlotError> for JoinRequestError {
    fn from(err: SlotError) -> Self {
        JoinRequestError::Slot(err)
    }
}

impl From<JoinRequestError> for DomainError {
    fn from(err: JoinRequestError) -> Self {
        let mut domain = DomainError::new(err.code(), err.message());
        if let JoinRequestError::SlotNotJoinable { available, .. } = &err {
            domain = domain.with_detail("available", available.to_string());
        }
        domain
    }
}

impl From<DomainError> for JoinRequestError {
    fn from(err: DomainError) -> Self {
        JoinRequestError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_not_joinable_reports_capacity_context() {
        let slot_id = SlotId::new();
        let err = JoinRequestError::slot_not_joinable(slot_id, SlotStatus::Full, 0, 2);
        assert_eq!(err.code(), ErrorCode::SlotNotJoinable);
        let msg = err.message();
        assert!(msg.contains("2 guests"));
        assert!(msg.contains("0 seats remain"));
    }

    #[test]
    fn already_resolved_names_terminal_state() {
        let id = JoinRequestId::new();
        let err = JoinRequestError::already_resolved(id, JoinRequestStatus::Declined);
        assert_eq!(err.code(), ErrorCode::RequestAlreadyResolved);
        assert!(err.message().contains("Declined"));
    }

    #[test]
    fn slot_error_code_passes_through() {
        let err = JoinRequestError::from(SlotError::closed(SlotId::new()));
        assert_eq!(err.code(), ErrorCode::SlotClosed);
    }

    #[test]
    fn converts_to_domain_error() {
        let err = JoinRequestError::duplicate_pending(SlotId::new(), BookingId::new());
        let domain: DomainError = err.clone().into();
        assert_eq!(domain.code, err.code());
    }

    #[test]
    fn display_matches_message() {
        let err = JoinRequestError::not_authorized();
        assert_eq!(format!("{}", err), err.message());
    }
}
