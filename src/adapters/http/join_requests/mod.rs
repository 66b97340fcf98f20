//! Join request HTTP module.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DecisionDto, JoinRequestResponse, RespondToJoinRequestRequest, SubmitJoinRequestRequest,
};
pub use handlers::JoinRequestWithSlotResponse;
pub use routes::join_request_routes;
