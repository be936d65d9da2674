//! Application handlers.
//!
//! Command handlers that orchestrate domain operations and the renderer port.

pub mod interview;

pub use interview::{
    ConductTurnCommand, ConductTurnError, ConductTurnHandler, ConductTurnResult,
    StartInterviewCommand, StartInterviewError, StartInterviewHandler, StartInterviewResult,
};
