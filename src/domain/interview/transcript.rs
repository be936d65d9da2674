//! Append-only interview transcript.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::phase::InterviewPhase;
use crate::domain::foundation::QuestionId;

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub question_id: QuestionId,
    /// Phase the question was asked in.
    pub phase: InterviewPhase,
    pub response: String,
}

impl Turn {
    pub fn new(
        question_id: QuestionId,
        phase: InterviewPhase,
        response: impl Into<String>,
    ) -> Self {
        Self {
            question_id,
            phase,
            response: response.into(),
        }
    }

    /// Whitespace-only answers count as empty.
    pub fn is_answered(&self) -> bool {
        !self.response.trim().is_empty()
    }
}

/// Ordered turns. Existing turns are never mutated or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// True if `id` was asked at any point in the session.
    pub fn has_asked(&self, id: &QuestionId) -> bool {
        self.turns.iter().any(|t| &t.question_id == id)
    }

    /// Every question id present in the transcript.
    pub fn asked_ids(&self) -> BTreeSet<&QuestionId> {
        self.turns.iter().map(|t| &t.question_id).collect()
    }

    /// Turns asked in `phase`, in order.
    pub fn in_phase(&self, phase: InterviewPhase) -> impl Iterator<Item = &Turn> + '_ {
        self.turns.iter().filter(move |t| t.phase == phase)
    }

    /// Number of non-empty answers given in `phase`.
    pub fn answered_in_phase(&self, phase: InterviewPhase) -> usize {
        self.in_phase(phase).filter(|t| t.is_answered()).count()
    }

    /// Non-empty answers of `phase` joined by newlines.
    pub fn phase_text(&self, phase: InterviewPhase) -> String {
        self.in_phase(phase)
            .filter(|t| t.is_answered())
            .map(|t| t.response.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Turn> for Transcript {
    fn from_iter<I: IntoIterator<Item = Turn>>(iter: I) -> Self {
        Self {
            turns: iter.into_iter().collect(),
        }
    }
}
