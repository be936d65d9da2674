//! Caller-owned interview session.
//!
//! The engine never stores sessions. A session is a plain value the caller
//! keeps between turns; `apply` and `record_answer` are its only mutators.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::engine::TurnDecision;
use super::phase::InterviewPhase;
use super::question::QuestionSpec;
use super::transcript::{Transcript, Turn};
use crate::domain::foundation::{
    DomainError, ErrorCode, QuestionId, SessionId, StateMachine, Timestamp,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSession {
    id: SessionId,
    activity: String,
    category: Category,
    phase: InterviewPhase,
    transcript: Transcript,
    depth_counter: u32,
    pending: Option<QuestionSpec>,
    finished: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl InterviewSession {
    /// Opens a session in the opening phase. The category is fixed from here on.
    pub fn new(activity: impl Into<String>, category: Category) -> Self {
        let now = Timestamp::now();
        Self {
            id: SessionId::new(),
            activity: activity.into(),
            category,
            phase: InterviewPhase::Opening,
            transcript: Transcript::new(),
            depth_counter: 0,
            pending: None,
            finished: false,
            created_at: now,
            updated_at: now,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn phase(&self) -> InterviewPhase {
        self.phase
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn depth_counter(&self) -> u32 {
        self.depth_counter
    }

    /// The question asked but not yet answered.
    pub fn pending_question(&self) -> Option<&QuestionSpec> {
        self.pending.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Seconds between opening the session and its last change.
    pub fn elapsed_secs(&self) -> u64 {
        self.updated_at.secs_since(&self.created_at)
    }

    // ───────────────────────────────────────────────────────────────
    // Mutators
    // ───────────────────────────────────────────────────────────────

    /// Applies an engine decision: moves the phase forward and makes the
    /// chosen question pending. A final decision closes the session instead.
    ///
    /// # Errors
    ///
    /// - `InterviewFinished` if the session was already closed
    /// - `InvalidStateTransition` if the decision would move the phase backward
    ///   or skip a phase
    pub fn apply(&mut self, decision: TurnDecision) -> Result<(), DomainError> {
        if self.finished {
            return Err(DomainError::new(
                ErrorCode::InterviewFinished,
                "Interview is already finished",
            ));
        }

        let from = self.phase;
        let target = decision.phase();
        if target != from {
            self.phase = from.transition_to(target).map_err(|e| {
                DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                    .with_detail("from", from.key())
                    .with_detail("to", target.key())
            })?;
        }

        self.depth_counter = decision.depth_counter;
        if decision.is_final() {
            self.finished = true;
            self.pending = None;
        } else {
            self.pending = Some(decision.question);
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Records the answer to the pending question in the current phase.
    ///
    /// # Errors
    ///
    /// - `NoPendingQuestion` if nothing is waiting for an answer
    /// - `QuestionMismatch` if `question_id` is not the pending question
    pub fn record_answer(
        &mut self,
        question_id: &QuestionId,
        response: impl Into<String>,
    ) -> Result<(), DomainError> {
        let pending = self.pending.as_ref().ok_or_else(|| {
            DomainError::new(ErrorCode::NoPendingQuestion, "No question is awaiting an answer")
        })?;

        if &pending.id != question_id {
            return Err(DomainError::new(
                ErrorCode::QuestionMismatch,
                "Answer does not belong to the pending question",
            )
            .with_detail("pending", pending.id.as_str())
            .with_detail("received", question_id.as_str()));
        }

        self.transcript
            .push(Turn::new(question_id.clone(), self.phase, response));
        self.pending = None;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
