//! HTTP DTOs for join request endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::join_request::JoinRequestDecision;
use crate::domain::join_request::{JoinRequest, JoinRequestStatus};

// Request DTOs

/// Request to join an existing slot with an existing booking.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitJoinRequestRequest {
    pub slot_id: String,
    pub booking_id: String,
    /// Optional message shown to the slot creator.
    #[serde(default)]
    pub message: Option<String>,
}

/// The creator's decision on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionDto {
    Approve,
    Decline,
}

impl From<DecisionDto> for JoinRequestDecision {
    fn from(dto: DecisionDto) -> Self {
        match dto {
            DecisionDto::Approve => JoinRequestDecision::Approve,
            DecisionDto::Decline => JoinRequestDecision::Decline,
        }
    }
}

/// Request to resolve a pending join request.
#[derive(Debug, Clone, Deserialize)]
pub struct RespondToJoinRequestRequest {
    pub decision: DecisionDto,
    /// Optional note to the requester; recorded as the decline reason.
    #[serde(default)]
    pub message: Option<String>,
}

// Response DTOs

/// Join request state as exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct JoinRequestResponse {
    pub id: String,
    pub slot_id: String,
    pub booking_id: String,
    pub requester_id: String,
    pub guest_count: u32,
    pub status: JoinRequestStatus,
    pub message: Option<String>,
    pub decline_reason: Option<String>,
    pub created_at: String,
    pub responded_at: Option<String>,
}

impl From<JoinRequest> for JoinRequestResponse {
    fn from(request: JoinRequest) -> Self {
        Self {
            id: request.id.to_string(),
            slot_id: request.slot_id.to_string(),
            booking_id: request.booking_id.to_string(),
            requester_id: request.requester_id.to_string(),
            guest_count: request.guest_count,
            status: request.status,
            message: request.message,
            decline_reason: request.decline_reason,
            created_at: request.created_at.as_datetime().to_rfc3339(),
            responded_at: request
                .responded_at
                .map(|ts| ts.as_datetime().to_rfc3339()),
        }
    }
}
