//! Join request workflow handlers.

mod cancel_join_request;
mod respond_to_join_request;
mod submit_join_request;

pub use cancel_join_request::{
    CancelJoinRequestCommand, CancelJoinRequestHandler, CancelJoinRequestResult,
};
pub use respond_to_join_request::{
    JoinRequestDecision, RespondToJoinRequestCommand, RespondToJoinRequestHandler,
    RespondToJoinRequestResult,
};
pub use submit_join_request::{
    SubmitJoinRequestCommand, SubmitJoinRequestHandler, SubmitJoinRequestResult,
};
