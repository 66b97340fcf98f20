//! Matching query handlers.

mod match_slots;

pub use match_slots::{MatchSlotsHandler, MatchSlotsQuery};
