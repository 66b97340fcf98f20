//! Traveler preferences for slot matching.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DestinationId, TripDate, ValidationError};

/// Inclusive departure date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: TripDate,
    pub end: TripDate,
}

impl DateRange {
    /// Creates a range, validating `start <= end`.
    pub fn new(start: TripDate, end: TripDate) -> Result<Self, ValidationError> {
        if end.is_before(&start) {
            return Err(ValidationError::invalid_format(
                "date_range",
                format!("range end {} is before start {}", end, start),
            ));
        }
        Ok(Self { start, end })
    }

    /// True if the date falls within the range (inclusive).
    pub fn contains(&self, date: &TripDate) -> bool {
        !date.is_before(&self.start) && !self.end.is_before(date)
    }
}

/// Solo traveler preferences driving candidate scoring.
///
/// All criteria are optional; absent criteria simply contribute no score.
/// `min_available` defaults to 1 seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPreferences {
    /// Preferred destination by catalog id (exact match bonus).
    #[serde(default)]
    pub destination_id: Option<DestinationId>,

    /// Preferred destination by name (fuzzy substring bonus).
    #[serde(default)]
    pub destination_name: Option<String>,

    /// Preferred departure window. Without one, trips from today onward
    /// are considered.
    #[serde(default)]
    pub date_range: Option<DateRange>,

    /// Per-person budget in minor currency units.
    #[serde(default)]
    pub budget: Option<i64>,

    /// Preferred package category.
    #[serde(default)]
    pub category: Option<String>,

    /// Preferred package type.
    #[serde(default)]
    pub package_type: Option<String>,

    /// Preferred travel style tag.
    #[serde(default)]
    pub travel_style: Option<String>,

    /// Minimum open seats a slot must have to be considered.
    #[serde(default = "default_min_available")]
    pub min_available: u32,
}

fn default_min_available() -> u32 {
    1
}

impl Default for MatchPreferences {
    fn default() -> Self {
        Self {
            destination_id: None,
            destination_name: None,
            date_range: None,
            budget: None,
            category: None,
            package_type: None,
            travel_style: None,
            min_available: default_min_available(),
        }
    }
}

impl MatchPreferences {
    /// Effective seat requirement; a zero request still needs one open seat.
    pub fn required_seats(&self) -> u32 {
        self.min_available.max(1)
    }
}
