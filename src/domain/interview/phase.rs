//! Interview phases.
//!
//! Phases are strictly ordered and only move forward:
//! `Opening` → `Exploration` → `Metacognition` → `Future`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The stage of the interview the candidate is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewPhase {
    /// Ice-breaking small talk (how the candidate got here, timing).
    Opening,

    /// Narrative of the activity: trigger, process, difficulty, discovery.
    Exploration,

    /// Reflection on what was learned and how the candidate changed.
    Metacognition,

    /// How the activity connects to what comes next.
    Future,
}

impl InterviewPhase {
    /// Returns all phases in canonical order.
    pub fn all() -> &'static [InterviewPhase] {
        &[
            InterviewPhase::Opening,
            InterviewPhase::Exploration,
            InterviewPhase::Metacognition,
            InterviewPhase::Future,
        ]
    }

    /// Returns the 0-based index of this phase in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            InterviewPhase::Opening => 0,
            InterviewPhase::Exploration => 1,
            InterviewPhase::Metacognition => 2,
            InterviewPhase::Future => 3,
        }
    }

    /// Returns the next phase in order, if any.
    pub fn next(&self) -> Option<InterviewPhase> {
        Self::all().get(self.order_index() + 1).copied()
    }

    /// Returns the snake_case key used in catalog files and logs.
    pub fn key(&self) -> &'static str {
        match self {
            InterviewPhase::Opening => "opening",
            InterviewPhase::Exploration => "exploration",
            InterviewPhase::Metacognition => "metacognition",
            InterviewPhase::Future => "future",
        }
    }

    /// Returns the interviewer's primary directive in this phase.
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Opening => "Put the candidate at ease with light, concrete questions.",
            Self::Exploration => {
                "Draw out the story of the activity: why it started, how it went, what was hard."
            }
            Self::Metacognition => "Ask the candidate to step back and explain what they learned.",
            Self::Future => "Connect the activity to the candidate's next steps and goals.",
        }
    }
}

impl Default for InterviewPhase {
    fn default() -> Self {
        Self::Opening
    }
}

impl fmt::Display for InterviewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl StateMachine for InterviewPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().collect()
    }
}
