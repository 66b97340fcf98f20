//! HTTP DTOs for matching endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DestinationId, DomainError, TripDate, ValidationError};
use crate::domain::matching::{
    DateRange, MatchCandidate, MatchPreferences, ScoreBreakdown,
};

use super::super::slots::SlotResponse;

// Request DTOs

/// A match query as submitted by a solo traveler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchQueryRequest {
    #[serde(default)]
    pub destination_id: Option<String>,
    #[serde(default)]
    pub destination_name: Option<String>,
    /// Earliest acceptable departure, ISO `YYYY-MM-DD`.
    #[serde(default)]
    pub date_from: Option<String>,
    /// Latest acceptable departure, ISO `YYYY-MM-DD`.
    #[serde(default)]
    pub date_to: Option<String>,
    /// Per-person budget in minor currency units.
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub package_type: Option<String>,
    #[serde(default)]
    pub travel_style: Option<String>,
    /// Minimum open seats required; defaults to 1.
    #[serde(default)]
    pub min_available: Option<u32>,
    /// Requested result count; clamped server-side.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl MatchQueryRequest {
    /// Converts the wire query into domain preferences.
    ///
    /// A half-open date window is widened to a full range: `date_from` alone
    /// searches one year onward, `date_to` alone searches from today.
    pub fn into_preferences(self) -> Result<(MatchPreferences, Option<usize>), DomainError> {
        let date_range = match (self.date_from.as_deref(), self.date_to.as_deref()) {
            (None, None) => None,
            (from, to) => {
                let from = from
                    .map(|s| s.parse::<TripDate>())
                    .transpose()
                    .map_err(DomainError::from)?;
                let to = to
                    .map(|s| s.parse::<TripDate>())
                    .transpose()
                    .map_err(DomainError::from)?;
                let start = from.unwrap_or_else(TripDate::today);
                let end = to.unwrap_or_else(|| start.plus_days(365));
                Some(DateRange::new(start, end).map_err(DomainError::from)?)
            }
        };

        let destination_id = self
            .destination_id
            .map(DestinationId::new)
            .transpose()
            .map_err(|e: ValidationError| DomainError::from(e))?;

        let prefs = MatchPreferences {
            destination_id,
            destination_name: self.destination_name,
            date_range,
            budget: self.budget,
            category: self.category,
            package_type: self.package_type,
            travel_style: self.travel_style,
            min_available: self.min_available.unwrap_or(1),
        };
        Ok((prefs, self.limit))
    }
}

// Response DTOs

/// One ranked recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct MatchCandidateResponse {
    pub slot: SlotResponse,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

impl From<MatchCandidate> for MatchCandidateResponse {
    fn from(candidate: MatchCandidate) -> Self {
        Self {
            score: candidate.score,
            breakdown: candidate.breakdown,
            slot: SlotResponse::from(candidate.slot),
        }
    }
}

/// Ranked recommendations for a match query.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResultsResponse {
    pub results: Vec<MatchCandidateResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_defaults() {
        let request: MatchQueryRequest = serde_json::from_str("{}").unwrap();
        let (prefs, limit) = request.into_preferences().unwrap();
        assert_eq!(prefs, MatchPreferences::default());
        assert_eq!(limit, None);
    }

    #[test]
    fn full_range_parses() {
        let request: MatchQueryRequest = serde_json::from_str(
            r#"{"date_from": "2026-09-10", "date_to": "2026-09-20", "budget": 100000}"#,
        )
        .unwrap();
        let (prefs, _) = request.into_preferences().unwrap();
        let range = prefs.date_range.unwrap();
        assert_eq!(range.start.to_string(), "2026-09-10");
        assert_eq!(range.end.to_string(), "2026-09-20");
        assert_eq!(prefs.budget, Some(100_000));
    }

    #[test]
    fn from_only_widens_one_year() {
        let request = MatchQueryRequest {
            date_from: Some("2026-09-10".to_string()),
            ..Default::default()
        };
        let (prefs, _) = request.into_preferences().unwrap();
        let range = prefs.date_range.unwrap();
        assert_eq!(range.end.to_string(), "2027-09-10");
    }

    #[test]
    fn inverted_range_is_rejected() {
        let request = MatchQueryRequest {
            date_from: Some("2026-09-20".to_string()),
            date_to: Some("2026-09-10".to_string()),
            ..Default::default()
        };
        assert!(request.into_preferences().is_err());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let request = MatchQueryRequest {
            date_from: Some("20-09-2026".to_string()),
            ..Default::default()
        };
        assert!(request.into_preferences().is_err());
    }
}
