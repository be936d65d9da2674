//! Interview Command Handlers
//!
//! ## Commands
//! - `StartInterview` - Classify the activity and ask the opening question
//! - `ConductTurn` - Record an answer and ask the next question

mod conduct_turn;
mod start_interview;

pub use conduct_turn::{ConductTurnCommand, ConductTurnError, ConductTurnHandler, ConductTurnResult};
pub use start_interview::{
    StartInterviewCommand, StartInterviewError, StartInterviewHandler, StartInterviewResult,
};
