//! Matching domain module.
//!
//! Scores and ranks open slots against a solo traveler's preferences.
//! Everything here is pure: the application layer assembles a snapshot of
//! candidates and the engine orders it.
//!
//! # Module Structure
//!
//! - `engine` - MatchEngine and scoring weights
//! - `preferences` - MatchPreferences and DateRange
//! - `candidate` - CandidateSlot input and scored MatchCandidate output

mod candidate;
mod engine;
mod preferences;

pub use candidate::{CandidateSlot, MatchCandidate, ScoreBreakdown};
pub use engine::{MatchEngine, ScoringWeights};
pub use preferences::{DateRange, MatchPreferences};
