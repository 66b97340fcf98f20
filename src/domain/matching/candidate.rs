//! Match candidate types.

use serde::{Deserialize, Serialize};

use crate::domain::package::Package;
use crate::domain::slot::Slot;

/// A slot paired with its package, as fed into the match engine.
///
/// The caller assembles these from a consistent snapshot; the engine never
/// reads shared state itself.
#[derive(Debug, Clone)]
pub struct CandidateSlot {
    pub slot: Slot,
    pub package: Package,
}

/// Per-factor score components for one candidate.
///
/// Kept alongside the total so clients can explain a recommendation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Open-seat score, capped.
    pub availability: u32,
    /// Date proximity or departure-horizon score.
    pub date: u32,
    /// Destination id/name fit.
    pub destination: u32,
    /// Budget deviation band score.
    pub budget: u32,
    /// Category, package type and travel style bonuses.
    pub attributes: u32,
    /// Occupancy sweet-spot bonus.
    pub occupancy: u32,
    /// Freshly-created slot bonus.
    pub recency: u32,
}

impl ScoreBreakdown {
    /// Unweighted sum of all components.
    pub fn total(&self) -> u32 {
        self.availability
            + self.date
            + self.destination
            + self.budget
            + self.attributes
            + self.occupancy
            + self.recency
    }
}

/// A scored candidate, ordered output of the match engine. Ephemeral:
/// produced per query and discarded after the response.
#[derive(Debug, Clone)]
pub struct MatchCandidate {
    pub slot: Slot,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_all_components() {
        let breakdown = ScoreBreakdown {
            availability: 40,
            date: 30,
            destination: 25,
            budget: 20,
            attributes: 30,
            occupancy: 15,
            recency: 8,
        };
        assert_eq!(breakdown.total(), 168);
    }

    #[test]
    fn default_breakdown_totals_zero() {
        assert_eq!(ScoreBreakdown::default().total(), 0);
    }
}
