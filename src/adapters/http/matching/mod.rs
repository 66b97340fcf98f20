//! Matching HTTP module.

mod dto;
mod handlers;
mod routes;

pub use dto::{MatchCandidateResponse, MatchQueryRequest, MatchResultsResponse};
pub use routes::matching_routes;
