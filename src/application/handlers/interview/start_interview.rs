//! StartInterviewHandler - Classify the activity and ask the first question.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::interview::{InterviewEngine, InterviewSession, TurnDecision};
use crate::ports::{QuestionRenderer, RenderError, RenderRequest, RenderedQuestion};

/// Command to open a new interview.
#[derive(Debug, Clone)]
pub struct StartInterviewCommand {
    /// Free-text description of the candidate's inquiry activity.
    pub activity: String,
}

/// Result of opening an interview.
#[derive(Debug, Clone)]
pub struct StartInterviewResult {
    pub session: InterviewSession,
    pub decision: TurnDecision,
    pub question: RenderedQuestion,
}

/// Error type for opening an interview.
#[derive(Debug, Clone)]
pub enum StartInterviewError {
    /// Activity text was blank
    Validation(ValidationError),
    /// Domain error
    Domain(DomainError),
    /// Renderer error
    Renderer(RenderError),
}

impl std::fmt::Display for StartInterviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartInterviewError::Validation(err) => write!(f, "{}", err),
            StartInterviewError::Domain(err) => write!(f, "{}", err),
            StartInterviewError::Renderer(err) => write!(f, "Renderer error: {}", err),
        }
    }
}

impl std::error::Error for StartInterviewError {}

impl From<ValidationError> for StartInterviewError {
    fn from(err: ValidationError) -> Self {
        StartInterviewError::Validation(err)
    }
}

impl From<DomainError> for StartInterviewError {
    fn from(err: DomainError) -> Self {
        StartInterviewError::Domain(err)
    }
}

impl From<RenderError> for StartInterviewError {
    fn from(err: RenderError) -> Self {
        StartInterviewError::Renderer(err)
    }
}

/// Handler for opening interviews.
pub struct StartInterviewHandler<R: ?Sized + QuestionRenderer> {
    engine: Arc<InterviewEngine>,
    renderer: Arc<R>,
}

impl<R: ?Sized + QuestionRenderer> StartInterviewHandler<R> {
    pub fn new(engine: Arc<InterviewEngine>, renderer: Arc<R>) -> Self {
        Self { engine, renderer }
    }

    pub async fn handle(
        &self,
        cmd: StartInterviewCommand,
    ) -> Result<StartInterviewResult, StartInterviewError> {
        // 1. Validate input
        let activity = cmd.activity.trim();
        if activity.is_empty() {
            return Err(ValidationError::empty_field("activity").into());
        }

        // 2. Classify and open the session
        let mut session = self.engine.start(activity);

        // 3. Decide the first question
        let decision = self.engine.next_turn(&session);

        // 4. Render it
        let request = RenderRequest::from_decision(session.id(), session.category(), &decision);
        let question = self.renderer.render(&request).await?;

        // 5. Make it pending
        session.apply(decision.clone())?;

        Ok(StartInterviewResult {
            session,
            decision,
            question,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::renderer::MockQuestionRenderer;
    use crate::domain::foundation::QuestionId;
    use crate::domain::interview::{Category, InterviewPhase};

    fn handler(renderer: MockQuestionRenderer) -> StartInterviewHandler<MockQuestionRenderer> {
        StartInterviewHandler::new(Arc::new(InterviewEngine::builtin()), Arc::new(renderer))
    }

    fn cmd(activity: &str) -> StartInterviewCommand {
        StartInterviewCommand {
            activity: activity.to_string(),
        }
    }

    #[tokio::test]
    async fn test_start_classifies_and_asks_opening_question() {
        let renderer = MockQuestionRenderer::new().with_text("How did you get here today?");
        let handler = handler(renderer.clone());

        let result = handler
            .handle(cmd("I practiced soccer every day with my team for the tournament"))
            .await
            .unwrap();

        assert_eq!(result.session.category(), Category::CompetitiveSports);
        assert_eq!(result.session.phase(), InterviewPhase::Opening);
        assert_eq!(result.question.text, "How did you get here today?");
        assert_eq!(result.question.question_id, QuestionId::new("open-1").unwrap());
        assert_eq!(
            result.session.pending_question().map(|q| q.id.as_str()),
            Some("open-1")
        );
        assert_eq!(renderer.call_count(), 1);
    }

    #[tokio::test]
    async fn test_start_passes_category_style_to_renderer() {
        let renderer = MockQuestionRenderer::new();
        let handler = handler(renderer.clone());

        handler.handle(cmd("student council vote")).await.unwrap();

        let calls = renderer.get_calls();
        assert_eq!(calls[0].category, Category::LeadershipConsensus);
        assert_eq!(calls[0].style_hint, Category::LeadershipConsensus.style_hint());
    }

    #[tokio::test]
    async fn test_start_rejects_blank_activity() {
        let renderer = MockQuestionRenderer::new();
        let handler = handler(renderer.clone());

        let result = handler.handle(cmd("   ")).await;

        assert!(matches!(result, Err(StartInterviewError::Validation(_))));
        assert_eq!(renderer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_start_surfaces_renderer_error() {
        let renderer = MockQuestionRenderer::new().with_error(RenderError::EmptyOutput);
        let handler = handler(renderer);

        let result = handler.handle(cmd("robot club")).await;

        assert!(matches!(
            result,
            Err(StartInterviewError::Renderer(RenderError::EmptyOutput))
        ));
    }
}
