//! Weighted slot scoring and ranking.
//!
//! The engine is a pure function of its inputs: candidate slots, traveler
//! preferences, and the caller-supplied clock. It never touches shared state,
//! so repeated calls over the same snapshot return the same ordering.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, TripDate};

use super::{CandidateSlot, MatchCandidate, MatchPreferences, ScoreBreakdown};

/// Additive score weights with per-factor caps.
///
/// The defaults encode the product ranking policy; they are fixed at
/// construction so one engine instance always scores consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Points per open seat.
    pub availability_per_seat: u32,
    /// Ceiling for the availability factor.
    pub availability_cap: u32,

    /// Maximum date-proximity score (exact date match).
    pub date_cap: u32,
    /// Points lost per day of distance from the preferred departure.
    pub date_decay_per_day: u32,
    /// Flat bonus when no date preference is given and the trip departs
    /// within the sweet horizon.
    pub horizon_bonus: u32,
    /// Sweet departure horizon, in days from now (inclusive).
    pub horizon_min_days: i64,
    pub horizon_max_days: i64,

    /// Exact destination-id match bonus.
    pub destination_exact: u32,
    /// Fuzzy destination-name match bonus (mutually exclusive with exact).
    pub destination_fuzzy: u32,

    /// Budget deviation bands: within 10/20/30/50 percent.
    pub budget_within_10: u32,
    pub budget_within_20: u32,
    pub budget_within_30: u32,
    pub budget_within_50: u32,

    /// Attribute match bonuses.
    pub category_match: u32,
    pub package_type_match: u32,
    pub travel_style_match: u32,

    /// Bonus when the slot is 30-70% full.
    pub occupancy_sweet_spot: u32,
    /// Smaller bonus below 30% (a group still forming).
    pub occupancy_forming: u32,

    /// Bonus for slots created within the last week.
    pub recency_fresh: u32,
    /// Reduced bonus up to two weeks old.
    pub recency_recent: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            availability_per_seat: 10,
            availability_cap: 40,
            date_cap: 30,
            date_decay_per_day: 2,
            horizon_bonus: 15,
            horizon_min_days: 14,
            horizon_max_days: 28,
            destination_exact: 25,
            destination_fuzzy: 15,
            budget_within_10: 20,
            budget_within_20: 15,
            budget_within_30: 10,
            budget_within_50: 5,
            category_match: 10,
            package_type_match: 10,
            travel_style_match: 10,
            occupancy_sweet_spot: 15,
            occupancy_forming: 8,
            recency_fresh: 8,
            recency_recent: 5,
        }
    }
}

/// Scores and ranks candidate slots against traveler preferences.
pub struct MatchEngine {
    weights: ScoringWeights,
}

impl MatchEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Filters and ranks candidates.
    ///
    /// Filtering drops closed slots, slots with fewer open seats than the
    /// preference requires, and slots outside the preferred date window
    /// (defaulting to "from today onward"). Survivors are scored and sorted
    /// by score descending, ties broken by earlier departure, then by more
    /// open seats. The sort is stable, so the ordering is deterministic for
    /// a given input snapshot.
    pub fn rank(
        &self,
        candidates: Vec<CandidateSlot>,
        prefs: &MatchPreferences,
        now: Timestamp,
    ) -> Vec<MatchCandidate> {
        let today = TripDate::from_date(now.as_datetime().date_naive());

        let mut ranked: Vec<MatchCandidate> = candidates
            .into_iter()
            .filter(|c| self.passes_filters(c, prefs, &today))
            .map(|c| {
                let breakdown = self.score(&c, prefs, &today, &now);
                MatchCandidate {
                    score: breakdown.total(),
                    breakdown,
                    slot: c.slot,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.slot.trip_date.cmp(&b.slot.trip_date))
                .then_with(|| {
                    b.slot
                        .available_capacity()
                        .cmp(&a.slot.available_capacity())
                })
        });
        ranked
    }

    fn passes_filters(
        &self,
        candidate: &CandidateSlot,
        prefs: &MatchPreferences,
        today: &TripDate,
    ) -> bool {
        let slot = &candidate.slot;
        if slot.is_closed() {
            return false;
        }
        if slot.available_capacity() < prefs.required_seats() {
            return false;
        }
        match &prefs.date_range {
            Some(range) => range.contains(&slot.trip_date),
            None => !slot.trip_date.is_before(today),
        }
    }

    fn score(
        &self,
        candidate: &CandidateSlot,
        prefs: &MatchPreferences,
        today: &TripDate,
        now: &Timestamp,
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            availability: self.availability_score(candidate),
            date: self.date_score(candidate, prefs, today),
            destination: self.destination_score(candidate, prefs),
            budget: self.budget_score(candidate, prefs),
            attributes: self.attribute_score(candidate, prefs),
            occupancy: self.occupancy_score(candidate),
            recency: self.recency_score(candidate, now),
        }
    }

    fn availability_score(&self, candidate: &CandidateSlot) -> u32 {
        let open = candidate.slot.available_capacity();
        (open * self.weights.availability_per_seat).min(self.weights.availability_cap)
    }

    fn date_score(
        &self,
        candidate: &CandidateSlot,
        prefs: &MatchPreferences,
        today: &TripDate,
    ) -> u32 {
        match &prefs.date_range {
            Some(range) => {
                // Distance decay from the preferred departure (range start);
                // an exact match scores the cap.
                let distance = candidate.slot.trip_date.days_between(&range.start);
                let decay = distance.saturating_mul(self.weights.date_decay_per_day as i64);
                if decay >= self.weights.date_cap as i64 {
                    0
                } else {
                    self.weights.date_cap - decay as u32
                }
            }
            None => {
                let days_out = candidate.slot.trip_date.days_from(today);
                if (self.weights.horizon_min_days..=self.weights.horizon_max_days)
                    .contains(&days_out)
                {
                    self.weights.horizon_bonus
                } else {
                    0
                }
            }
        }
    }

    fn destination_score(&self, candidate: &CandidateSlot, prefs: &MatchPreferences) -> u32 {
        if let Some(wanted) = &prefs.destination_id {
            if wanted == &candidate.slot.destination_id {
                return self.weights.destination_exact;
            }
        }
        if let Some(wanted) = &prefs.destination_name {
            let wanted = wanted.to_lowercase();
            let actual = candidate.slot.destination_name.to_lowercase();
            if !wanted.is_empty() && (actual.contains(&wanted) || wanted.contains(&actual)) {
                return self.weights.destination_fuzzy;
            }
        }
        0
    }

    fn budget_score(&self, candidate: &CandidateSlot, prefs: &MatchPreferences) -> u32 {
        let Some(budget) = prefs.budget else {
            return 0;
        };
        if budget <= 0 {
            return 0;
        }
        let price = candidate.package.representative_price();
        let deviation_pct = (price - budget).abs().saturating_mul(100) / budget;
        match deviation_pct {
            0..=10 => self.weights.budget_within_10,
            11..=20 => self.weights.budget_within_20,
            21..=30 => self.weights.budget_within_30,
            31..=50 => self.weights.budget_within_50,
            _ => 0,
        }
    }

    fn attribute_score(&self, candidate: &CandidateSlot, prefs: &MatchPreferences) -> u32 {
        let package = &candidate.package;
        let mut score = 0;

        if let (Some(wanted), Some(actual)) = (&prefs.category, &package.category) {
            if wanted.eq_ignore_ascii_case(actual) {
                score += self.weights.category_match;
            }
        }
        if let (Some(wanted), Some(actual)) = (&prefs.package_type, &package.package_type) {
            if wanted.eq_ignore_ascii_case(actual) {
                score += self.weights.package_type_match;
            }
        }
        if let Some(style) = &prefs.travel_style {
            if package.has_travel_style(style) {
                score += self.weights.travel_style_match;
            }
        }
        score
    }

    fn occupancy_score(&self, candidate: &CandidateSlot) -> u32 {
        let slot = &candidate.slot;
        let occupancy_pct = slot.occupied_seats() * 100 / slot.max_capacity;
        if (30..=70).contains(&occupancy_pct) {
            self.weights.occupancy_sweet_spot
        } else if occupancy_pct < 30 {
            self.weights.occupancy_forming
        } else {
            0
        }
    }

    fn recency_score(&self, candidate: &CandidateSlot, now: &Timestamp) -> u32 {
        let age_days = now.days_since(&candidate.slot.created_at);
        if (0..=7).contains(&age_days) {
            self.weights.recency_fresh
        } else if (8..=14).contains(&age_days) {
            self.weights.recency_recent
        } else {
            0
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{
        BookingId, DestinationId, PackageId, SlotId, UserId,
    };
    use crate::domain::matching::DateRange;
    use crate::domain::package::Package;
    use crate::domain::pricing::PriceTable;
    use crate::domain::slot::Slot;

    fn package(id: &str) -> Package {
        Package {
            id: PackageId::new(id).unwrap(),
            title: format!("Package {}", id),
            category: Some("beach".to_string()),
            package_type: Some("budget".to_string()),
            travel_styles: vec!["nightlife".to_string()],
            duration_days: Some(5),
            prices: PriceTable::new(100_000, 50_000, None),
        }
    }

    fn slot(
        destination: &str,
        trip_date: TripDate,
        max_capacity: u32,
        seed_guests: u32,
    ) -> Slot {
        Slot::create(
            SlotId::new(),
            PackageId::new("pkg-1").unwrap(),
            DestinationId::new(destination).unwrap(),
            destination.trim_start_matches("dest-").to_string(),
            trip_date,
            max_capacity,
            UserId::new("creator-1").unwrap(),
            BookingId::new(),
            seed_guests,
        )
        .unwrap()
    }

    fn candidate(slot: Slot) -> CandidateSlot {
        CandidateSlot {
            slot,
            package: package("pkg-1"),
        }
    }

    fn in_days(days: i64) -> TripDate {
        TripDate::today().plus_days(days)
    }

    #[test]
    fn closed_slots_are_filtered_out() {
        let engine = MatchEngine::default();
        let mut closed = slot("dest-goa", in_days(20), 4, 1);
        closed.close();

        let ranked = engine.rank(
            vec![candidate(closed), candidate(slot("dest-goa", in_days(20), 4, 1))],
            &MatchPreferences::default(),
            Timestamp::now(),
        );
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn slots_below_min_available_are_filtered_out() {
        let engine = MatchEngine::default();
        let prefs = MatchPreferences {
            min_available: 3,
            ..Default::default()
        };

        // 4 seats, 2 taken: only 2 open.
        let ranked = engine.rank(
            vec![candidate(slot("dest-goa", in_days(20), 4, 2))],
            &prefs,
            Timestamp::now(),
        );
        assert!(ranked.is_empty());
    }

    #[test]
    fn past_trips_are_filtered_without_date_range() {
        let engine = MatchEngine::default();
        let ranked = engine.rank(
            vec![
                candidate(slot("dest-goa", in_days(-3), 4, 1)),
                candidate(slot("dest-goa", in_days(0), 4, 1)),
            ],
            &MatchPreferences::default(),
            Timestamp::now(),
        );
        // Today departures stay in; past ones drop.
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].slot.trip_date, in_days(0));
    }

    #[test]
    fn date_range_keeps_only_contained_trips() {
        let engine = MatchEngine::default();
        let prefs = MatchPreferences {
            date_range: Some(DateRange::new(in_days(10), in_days(20)).unwrap()),
            ..Default::default()
        };

        let ranked = engine.rank(
            vec![
                candidate(slot("dest-goa", in_days(9), 4, 1)),
                candidate(slot("dest-goa", in_days(15), 4, 1)),
                candidate(slot("dest-goa", in_days(21), 4, 1)),
            ],
            &prefs,
            Timestamp::now(),
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].slot.trip_date, in_days(15));
    }

    #[test]
    fn availability_score_is_capped() {
        let engine = MatchEngine::default();
        let ranked = engine.rank(
            vec![candidate(slot("dest-goa", in_days(20), 12, 1))],
            &MatchPreferences::default(),
            Timestamp::now(),
        );
        // 11 open seats x 10 points, capped at 40.
        assert_eq!(ranked[0].breakdown.availability, 40);
    }

    #[test]
    fn exact_date_match_scores_full_date_points() {
        let engine = MatchEngine::default();
        let target = in_days(15);
        let prefs = MatchPreferences {
            date_range: Some(DateRange::new(target, target.plus_days(10)).unwrap()),
            ..Default::default()
        };

        let ranked = engine.rank(
            vec![
                candidate(slot("dest-goa", target, 4, 1)),
                candidate(slot("dest-goa", target.plus_days(6), 4, 1)),
            ],
            &prefs,
            Timestamp::now(),
        );
        assert_eq!(ranked[0].breakdown.date, 30);
        assert_eq!(ranked[1].breakdown.date, 30 - 6 * 2);
        assert_eq!(ranked[0].slot.trip_date, target);
    }

    #[test]
    fn sweet_horizon_bonus_applies_without_date_preference() {
        let engine = MatchEngine::default();
        let ranked = engine.rank(
            vec![
                candidate(slot("dest-goa", in_days(20), 4, 1)),
                candidate(slot("dest-goa", in_days(60), 4, 1)),
            ],
            &MatchPreferences::default(),
            Timestamp::now(),
        );
        let near = ranked
            .iter()
            .find(|c| c.slot.trip_date == in_days(20))
            .unwrap();
        let far = ranked
            .iter()
            .find(|c| c.slot.trip_date == in_days(60))
            .unwrap();
        assert_eq!(near.breakdown.date, 15);
        assert_eq!(far.breakdown.date, 0);
    }

    #[test]
    fn exact_destination_beats_fuzzy_name() {
        let engine = MatchEngine::default();
        let prefs = MatchPreferences {
            destination_id: Some(DestinationId::new("dest-goa").unwrap()),
            destination_name: Some("goa".to_string()),
            ..Default::default()
        };

        let ranked = engine.rank(
            vec![candidate(slot("dest-goa", in_days(20), 4, 1))],
            &prefs,
            Timestamp::now(),
        );
        // Exact id match wins; the fuzzy bonus is not stacked on top.
        assert_eq!(ranked[0].breakdown.destination, 25);
    }

    #[test]
    fn fuzzy_name_match_is_case_insensitive_substring() {
        let engine = MatchEngine::default();
        let prefs = MatchPreferences {
            destination_name: Some("GOA".to_string()),
            ..Default::default()
        };

        let ranked = engine.rank(
            vec![candidate(slot("dest-goa", in_days(20), 4, 1))],
            &prefs,
            Timestamp::now(),
        );
        assert_eq!(ranked[0].breakdown.destination, 15);
    }

    #[test]
    fn budget_bands_award_decreasing_bonuses() {
        let engine = MatchEngine::default();
        let cases = [
            (100_000, 20), // exact
            (95_000, 20),  // ~5% off
            (85_000, 15),  // ~18% off
            (78_000, 10),  // ~28% off
            (70_000, 5),   // ~43% off
            (50_000, 0),   // 100% off
        ];
        for (budget, expected) in cases {
            let prefs = MatchPreferences {
                budget: Some(budget),
                ..Default::default()
            };
            let ranked = engine.rank(
                vec![candidate(slot("dest-goa", in_days(20), 4, 1))],
                &prefs,
                Timestamp::now(),
            );
            assert_eq!(
                ranked[0].breakdown.budget, expected,
                "budget {} should score {}",
                budget, expected
            );
        }
    }

    #[test]
    fn attribute_bonuses_are_independent() {
        let engine = MatchEngine::default();
        let prefs = MatchPreferences {
            category: Some("Beach".to_string()),
            package_type: Some("nonexistent".to_string()),
            travel_style: Some("NIGHTLIFE".to_string()),
            ..Default::default()
        };

        let ranked = engine.rank(
            vec![candidate(slot("dest-goa", in_days(20), 4, 1))],
            &prefs,
            Timestamp::now(),
        );
        // category (10) + travel style (10), package type misses.
        assert_eq!(ranked[0].breakdown.attributes, 20);
    }

    #[test]
    fn occupancy_sweet_spot_beats_forming_group() {
        let engine = MatchEngine::default();
        let half_full = slot("dest-goa", in_days(20), 10, 5); // 50%
        let forming = slot("dest-goa", in_days(20), 10, 1); // 10%
        let nearly_full = slot("dest-goa", in_days(20), 10, 8); // 80%

        let ranked = engine.rank(
            vec![
                candidate(half_full.clone()),
                candidate(forming.clone()),
                candidate(nearly_full.clone()),
            ],
            &MatchPreferences::default(),
            Timestamp::now(),
        );

        let score_of = |id| {
            ranked
                .iter()
                .find(|c| c.slot.id == id)
                .unwrap()
                .breakdown
                .occupancy
        };
        assert_eq!(score_of(half_full.id), 15);
        assert_eq!(score_of(forming.id), 8);
        assert_eq!(score_of(nearly_full.id), 0);
    }

    #[test]
    fn fresh_slots_get_recency_bonus() {
        let engine = MatchEngine::default();
        let fresh = slot("dest-goa", in_days(20), 4, 1);
        let mut stale = slot("dest-goa", in_days(20), 4, 1);
        stale.created_at = Timestamp::now().minus_days(30);
        stale.updated_at = stale.created_at;

        let ranked = engine.rank(
            vec![candidate(fresh.clone()), candidate(stale.clone())],
            &MatchPreferences::default(),
            Timestamp::now(),
        );
        let breakdown_of = |id| {
            ranked
                .iter()
                .find(|c| c.slot.id == id)
                .unwrap()
                .breakdown
        };
        assert_eq!(breakdown_of(fresh.id).recency, 8);
        assert_eq!(breakdown_of(stale.id).recency, 0);
    }

    #[test]
    fn perfect_match_outranks_plain_candidate() {
        let engine = MatchEngine::default();
        let target = in_days(15);
        let prefs = MatchPreferences {
            destination_id: Some(DestinationId::new("dest-goa").unwrap()),
            date_range: Some(DateRange::new(target, target.plus_days(14)).unwrap()),
            budget: Some(100_000),
            ..Default::default()
        };

        let perfect = slot("dest-goa", target, 4, 1);
        let plain = slot("dest-manali", target.plus_days(12), 4, 1);

        let ranked = engine.rank(
            vec![candidate(plain.clone()), candidate(perfect.clone())],
            &prefs,
            Timestamp::now(),
        );
        assert_eq!(ranked[0].slot.id, perfect.id);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn ties_break_by_earlier_date_then_more_seats() {
        let engine = MatchEngine::default();
        // Same score profile except departure date.
        let earlier = slot("dest-goa", in_days(20), 4, 1);
        let later = slot("dest-goa", in_days(21), 4, 1);

        let ranked = engine.rank(
            vec![candidate(later.clone()), candidate(earlier.clone())],
            &MatchPreferences::default(),
            Timestamp::now(),
        );
        assert_eq!(ranked[0].slot.id, earlier.id);

        // Same date and same score profile (availability capped at 40 for
        // both, both 50% full): more open seats wins.
        let roomy = slot("dest-goa", in_days(40), 12, 6); // 6 open
        let tight = slot("dest-goa", in_days(40), 10, 5); // 5 open
        let ranked = engine.rank(
            vec![candidate(tight.clone()), candidate(roomy.clone())],
            &MatchPreferences::default(),
            Timestamp::now(),
        );
        assert_eq!(ranked[0].slot.id, roomy.id);
    }

    #[test]
    fn ranking_is_deterministic_across_calls() {
        let engine = MatchEngine::default();
        let now = Timestamp::now();
        let slots: Vec<CandidateSlot> = (0..8)
            .map(|i| candidate(slot("dest-goa", in_days(10 + i), 6, 1 + (i as u32 % 3))))
            .collect();
        let prefs = MatchPreferences {
            destination_name: Some("goa".to_string()),
            budget: Some(90_000),
            ..Default::default()
        };

        let first: Vec<_> = engine
            .rank(slots.clone(), &prefs, now)
            .into_iter()
            .map(|c| (c.slot.id, c.score))
            .collect();
        let second: Vec<_> = engine
            .rank(slots, &prefs, now)
            .into_iter()
            .map(|c| (c.slot.id, c.score))
            .collect();
        assert_eq!(first, second);
    }
}
