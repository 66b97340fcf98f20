//! Slot status state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a group-trip slot.
///
/// `Available` and `Full` are derived from seat occupancy; `Closed` is set
/// by explicit admin action and is sticky - removals never reopen a closed
/// slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    /// Seats remain; new admissions may be requested.
    Available,

    /// Every seat is taken. Removals may return the slot to Available.
    Full,

    /// Terminally closed by an admin. No admissions, never reopened.
    Closed,
}

impl SlotStatus {
    /// Returns true if new admissions may be requested against this status.
    pub fn is_joinable(&self) -> bool {
        matches!(self, SlotStatus::Available)
    }
}

impl StateMachine for SlotStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SlotStatus::*;
        matches!(
            (self, target),
            // Occupancy-derived transitions
            (Available, Full)
                | (Full, Available)
            // Admin close from any open state
                | (Available, Closed)
                | (Full, Closed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SlotStatus::*;
        match self {
            Available => vec![Full, Closed],
            Full => vec![Available, Closed],
            Closed => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_can_fill() {
        assert!(SlotStatus::Available.can_transition_to(&SlotStatus::Full));
    }

    #[test]
    fn full_can_reopen_on_removal() {
        assert!(SlotStatus::Full.can_transition_to(&SlotStatus::Available));
    }

    #[test]
    fn open_states_can_close() {
        assert!(SlotStatus::Available.can_transition_to(&SlotStatus::Closed));
        assert!(SlotStatus::Full.can_transition_to(&SlotStatus::Closed));
    }

    #[test]
    fn closed_is_terminal() {
        assert!(SlotStatus::Closed.is_terminal());
        assert!(!SlotStatus::Closed.can_transition_to(&SlotStatus::Available));
        assert!(!SlotStatus::Closed.can_transition_to(&SlotStatus::Full));
    }

    #[test]
    fn only_available_is_joinable() {
        assert!(SlotStatus::Available.is_joinable());
        assert!(!SlotStatus::Full.is_joinable());
        assert!(!SlotStatus::Closed.is_joinable());
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&SlotStatus::Available).unwrap(),
            "\"available\""
        );
    }
}
