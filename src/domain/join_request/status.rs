//! Join request status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Status of a traveler's request to join an existing slot.
///
/// A request is created Pending and moves to exactly one terminal state:
/// the slot creator approves or declines it, or the requester cancels it
/// before a response. Terminal states are never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinRequestStatus {
    /// Awaiting the slot creator's decision.
    Pending,

    /// Creator approved; the booking was admitted into the slot.
    Approved,

    /// Creator declined, or capacity ran out before approval.
    Declined,

    /// Requester withdrew the request before a response.
    Cancelled,
}

impl JoinRequestStatus {
    /// Returns true if the request still awaits a decision.
    pub fn is_pending(&self) -> bool {
        matches!(self, JoinRequestStatus::Pending)
    }

    /// Returns true if the request reached a terminal state.
    pub fn is_resolved(&self) -> bool {
        !self.is_pending()
    }
}

impl StateMachine for JoinRequestStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use JoinRequestStatus::*;
        matches!(
            (self, target),
            (Pending, Approved) | (Pending, Declined) | (Pending, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use JoinRequestStatus::*;
        match self {
            Pending => vec![Approved, Declined, Cancelled],
            Approved | Declined | Cancelled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_reach_every_terminal_state() {
        let pending = JoinRequestStatus::Pending;
        assert!(pending.can_transition_to(&JoinRequestStatus::Approved));
        assert!(pending.can_transition_to(&JoinRequestStatus::Declined));
        assert!(pending.can_transition_to(&JoinRequestStatus::Cancelled));
    }

    #[test]
    fn terminal_states_never_transition() {
        for status in [
            JoinRequestStatus::Approved,
            JoinRequestStatus::Declined,
            JoinRequestStatus::Cancelled,
        ] {
            assert!(status.is_terminal());
            assert!(status.is_resolved());
            assert!(!status.can_transition_to(&JoinRequestStatus::Pending));
            assert!(!status.can_transition_to(&JoinRequestStatus::Approved));
        }
    }

    #[test]
    fn pending_is_not_terminal() {
        assert!(!JoinRequestStatus::Pending.is_terminal());
        assert!(JoinRequestStatus::Pending.is_pending());
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&JoinRequestStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }
}
