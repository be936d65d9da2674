//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine contract and
//! error types shared by the interview domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{QuestionId, SessionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
