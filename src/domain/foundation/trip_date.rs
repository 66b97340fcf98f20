//! Calendar-day value object for trip departure dates.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A departure date, resolution of one calendar day (UTC).
///
/// Part of a slot's natural key, so equality and hashing are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripDate(NaiveDate);

impl TripDate {
    /// Creates a trip date from a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a trip date from year/month/day, validating the combination.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "trip_date",
                    format!("{:04}-{:02}-{:02} is not a valid date", year, month, day),
                )
            })
    }

    /// Today's date in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Returns the inner calendar date.
    pub fn as_date(&self) -> &NaiveDate {
        &self.0
    }

    /// Signed number of days from `other` to `self`.
    ///
    /// Positive when `self` is later than `other`.
    pub fn days_from(&self, other: &TripDate) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }

    /// Absolute day distance between two dates.
    pub fn days_between(&self, other: &TripDate) -> i64 {
        self.days_from(other).abs()
    }

    /// Creates a new trip date the given number of days later.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + chrono::Duration::days(days))
    }

    /// True if this date is strictly before `other`.
    pub fn is_before(&self, other: &TripDate) -> bool {
        self.0 < other.0
    }
}

impl fmt::Display for TripDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TripDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("trip_date", e.to_string()))
    }
}
