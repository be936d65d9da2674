//! ConductTurnHandler - Record an answer, decide the next turn and render it.
//!
//! The session is owned by the caller and updated in place. Rendering runs
//! before the decision is applied, so a failed render leaves the answer
//! recorded and nothing pending; `resume` then asks again from the same
//! transcript.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};
use crate::domain::interview::{InterviewEngine, InterviewSession, TurnDecision};
use crate::ports::{QuestionRenderer, RenderError, RenderRequest, RenderedQuestion};

/// Command to answer the pending question.
#[derive(Debug, Clone)]
pub struct ConductTurnCommand {
    pub question_id: QuestionId,
    pub answer: String,
}

/// Result of one turn.
#[derive(Debug, Clone)]
pub struct ConductTurnResult {
    pub decision: TurnDecision,
    /// Next question, or `None` once the interview has finished.
    pub question: Option<RenderedQuestion>,
}

impl ConductTurnResult {
    pub fn is_finished(&self) -> bool {
        self.question.is_none()
    }
}

/// Error type for conducting a turn.
#[derive(Debug, Clone)]
pub enum ConductTurnError {
    /// Domain error
    Domain(DomainError),
    /// Renderer error
    Renderer(RenderError),
}

impl std::fmt::Display for ConductTurnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConductTurnError::Domain(err) => write!(f, "{}", err),
            ConductTurnError::Renderer(err) => write!(f, "Renderer error: {}", err),
        }
    }
}

impl std::error::Error for ConductTurnError {}

impl From<DomainError> for ConductTurnError {
    fn from(err: DomainError) -> Self {
        ConductTurnError::Domain(err)
    }
}

impl From<RenderError> for ConductTurnError {
    fn from(err: RenderError) -> Self {
        ConductTurnError::Renderer(err)
    }
}

/// Handler for interview turns.
pub struct ConductTurnHandler<R: ?Sized + QuestionRenderer> {
    engine: Arc<InterviewEngine>,
    renderer: Arc<R>,
}

impl<R: ?Sized + QuestionRenderer> ConductTurnHandler<R> {
    pub fn new(engine: Arc<InterviewEngine>, renderer: Arc<R>) -> Self {
        Self { engine, renderer }
    }

    pub async fn handle(
        &self,
        session: &mut InterviewSession,
        cmd: ConductTurnCommand,
    ) -> Result<ConductTurnResult, ConductTurnError> {
        // 1. Record the answer against the pending question
        session.record_answer(&cmd.question_id, cmd.answer)?;

        // 2. Decide, render and apply
        self.advance(session).await
    }

    /// Asks the next question without recording an answer.
    ///
    /// Used after a failed render, when the last answer is already in the
    /// transcript but no question is pending.
    pub async fn resume(
        &self,
        session: &mut InterviewSession,
    ) -> Result<ConductTurnResult, ConductTurnError> {
        if let Some(pending) = session.pending_question() {
            return Err(DomainError::new(
                ErrorCode::QuestionPending,
                "A question is still awaiting an answer",
            )
            .with_detail("pending", pending.id.as_str())
            .into());
        }
        self.advance(session).await
    }

    async fn advance(
        &self,
        session: &mut InterviewSession,
    ) -> Result<ConductTurnResult, ConductTurnError> {
        let decision = self.engine.next_turn(session);

        if decision.is_final() {
            session.apply(decision.clone())?;
            return Ok(ConductTurnResult {
                decision,
                question: None,
            });
        }

        let request = RenderRequest::from_decision(session.id(), session.category(), &decision);
        let question = self.renderer.render(&request).await?;

        session.apply(decision.clone())?;

        Ok(ConductTurnResult {
            decision,
            question: Some(question),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::renderer::MockQuestionRenderer;
    use crate::domain::interview::{InterviewPhase, PhaseVerdict};

    const SPORTS: &str = "I practiced soccer every day with my team for the tournament";

    fn engine() -> Arc<InterviewEngine> {
        Arc::new(InterviewEngine::builtin())
    }

    /// Opens a session with `open-1` pending.
    fn started(engine: &InterviewEngine) -> InterviewSession {
        let mut session = engine.start(SPORTS);
        session.apply(engine.next_turn(&session)).unwrap();
        session
    }

    fn pending_id(session: &InterviewSession) -> QuestionId {
        session.pending_question().unwrap().id.clone()
    }

    fn answer(session: &InterviewSession, text: &str) -> ConductTurnCommand {
        ConductTurnCommand {
            question_id: pending_id(session),
            answer: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_turn_records_answer_and_asks_next() {
        let engine = engine();
        let renderer = MockQuestionRenderer::new().with_text("And what time did you wake up?");
        let handler = ConductTurnHandler::new(engine.clone(), Arc::new(renderer));
        let mut session = started(&engine);

        let cmd = answer(&session, "I came by train.");
        let result = handler.handle(&mut session, cmd).await.unwrap();

        assert_eq!(session.transcript().len(), 1);
        assert_eq!(result.decision.verdict, PhaseVerdict::Stay { phase: InterviewPhase::Opening });
        assert_eq!(result.question.unwrap().text, "And what time did you wake up?");
        assert_eq!(pending_id(&session).as_str(), "open-2");
    }

    #[tokio::test]
    async fn test_turn_rejects_answer_for_other_question() {
        let engine = engine();
        let handler = ConductTurnHandler::new(engine.clone(), Arc::new(MockQuestionRenderer::new()));
        let mut session = started(&engine);

        let cmd = ConductTurnCommand {
            question_id: QuestionId::new("open-3").unwrap(),
            answer: "hello".to_string(),
        };
        let result = handler.handle(&mut session, cmd).await;

        match result {
            Err(ConductTurnError::Domain(err)) => assert_eq!(err.code, ErrorCode::QuestionMismatch),
            other => panic!("expected mismatch, got {:?}", other),
        }
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_failed_render_can_be_resumed() {
        let engine = engine();
        let renderer = MockQuestionRenderer::new()
            .with_error(RenderError::unavailable("down"))
            .with_text("Second try");
        let handler = ConductTurnHandler::new(engine.clone(), Arc::new(renderer));
        let mut session = started(&engine);

        let cmd = answer(&session, "I came by train.");
        let failed = handler.handle(&mut session, cmd).await;
        assert!(matches!(failed, Err(ConductTurnError::Renderer(_))));
        assert_eq!(session.transcript().len(), 1);
        assert!(session.pending_question().is_none());

        let resumed = handler.resume(&mut session).await.unwrap();
        assert_eq!(resumed.question.unwrap().text, "Second try");
        assert_eq!(pending_id(&session).as_str(), "open-2");
    }

    #[tokio::test]
    async fn test_resume_refuses_while_question_pending() {
        let engine = engine();
        let handler = ConductTurnHandler::new(engine.clone(), Arc::new(MockQuestionRenderer::new()));
        let mut session = started(&engine);

        let result = handler.resume(&mut session).await;

        match result {
            Err(ConductTurnError::Domain(err)) => assert_eq!(err.code, ErrorCode::QuestionPending),
            other => panic!("expected pending error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_advance_is_reported_in_decision() {
        let engine = engine();
        let handler = ConductTurnHandler::new(engine.clone(), Arc::new(MockQuestionRenderer::new()));
        let mut session = started(&engine);

        let answers = [
            "I took the train this morning.",
            "It took about an hour, the time went fast.",
            "I feel ready.",
        ];
        let mut last = None;
        for text in answers {
            let cmd = answer(&session, text);
            last = Some(handler.handle(&mut session, cmd).await.unwrap());
        }

        let last = last.unwrap();
        assert!(last.decision.verdict.advanced());
        assert_eq!(session.phase(), InterviewPhase::Exploration);
        assert_eq!(pending_id(&session).as_str(), "sport-exp-1");
    }
}
