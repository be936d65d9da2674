//! Resilient renderer - timeout and template fallback around a collaborator.
//!
//! The primary renderer gets a bounded amount of time. On timeout, error or
//! blank output the question is phrased by the template renderer instead,
//! so rendering never blocks the interview.
//!
//! # Example
//!
//! ```ignore
//! let primary = Arc::new(AnthropicQuestionRenderer::new(config)?);
//!
//! let renderer = ResilientQuestionRenderer::new(primary, TemplateQuestionRenderer::new())
//!     .with_timeout(Duration::from_secs(4));
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use super::TemplateQuestionRenderer;
use crate::ports::{QuestionRenderer, RenderError, RenderRequest, RenderSource, RenderedQuestion};

/// Default time the collaborator is given per question.
pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(4);

/// Renderer wrapper with timeout and deterministic fallback.
pub struct ResilientQuestionRenderer {
    primary: Arc<dyn QuestionRenderer>,
    fallback: TemplateQuestionRenderer,
    timeout: Duration,
}

impl ResilientQuestionRenderer {
    pub fn new(primary: Arc<dyn QuestionRenderer>, fallback: TemplateQuestionRenderer) -> Self {
        Self {
            primary,
            fallback,
            timeout: DEFAULT_RENDER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn try_primary(&self, request: &RenderRequest) -> Result<RenderedQuestion, RenderError> {
        let rendered = tokio::time::timeout(self.timeout, self.primary.render(request))
            .await
            .map_err(|_| RenderError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            })??;

        if rendered.text.trim().is_empty() {
            return Err(RenderError::EmptyOutput);
        }
        Ok(rendered)
    }
}

#[async_trait]
impl QuestionRenderer for ResilientQuestionRenderer {
    async fn render(&self, request: &RenderRequest) -> Result<RenderedQuestion, RenderError> {
        match self.try_primary(request).await {
            Ok(rendered) => Ok(rendered),
            Err(err) => {
                warn!(
                    renderer = self.primary.name(),
                    question_id = %request.question.id,
                    error = %err,
                    "collaborator failed, using template fallback"
                );
                Ok(self.fallback.render_as(request, RenderSource::Fallback))
            }
        }
    }

    fn name(&self) -> &str {
        self.primary.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::renderer::MockQuestionRenderer;
    use crate::domain::foundation::SessionId;
    use crate::domain::interview::{Category, InterviewEngine, InterviewPhase, Transcript};

    fn request() -> RenderRequest {
        let decision = InterviewEngine::builtin().decide(
            Category::SocialProblemSolving,
            InterviewPhase::Opening,
            &Transcript::new(),
            0,
        );
        RenderRequest::from_decision(SessionId::new(), Category::SocialProblemSolving, &decision)
    }

    fn wrap(mock: MockQuestionRenderer) -> ResilientQuestionRenderer {
        ResilientQuestionRenderer::new(Arc::new(mock), TemplateQuestionRenderer::new())
    }

    #[tokio::test]
    async fn passes_through_collaborator_text() {
        let renderer = wrap(MockQuestionRenderer::new().with_text("How did you get here?"));
        let rendered = renderer.render(&request()).await.unwrap();
        assert_eq!(rendered.text, "How did you get here?");
        assert_eq!(rendered.source, RenderSource::Collaborator);
    }

    #[tokio::test]
    async fn falls_back_on_error() {
        let renderer = wrap(MockQuestionRenderer::new().with_error(RenderError::unavailable("down")));
        let request = request();
        let rendered = renderer.render(&request).await.unwrap();
        assert_eq!(rendered.source, RenderSource::Fallback);
        assert_eq!(
            rendered.text,
            TemplateQuestionRenderer::new().render_text(&request)
        );
    }

    #[tokio::test]
    async fn falls_back_on_blank_text() {
        let renderer = wrap(MockQuestionRenderer::new().with_text("   "));
        let rendered = renderer.render(&request()).await.unwrap();
        assert_eq!(rendered.source, RenderSource::Fallback);
    }

    #[tokio::test(start_paused = true)]
    async fn falls_back_on_timeout() {
        let mock = MockQuestionRenderer::new()
            .with_text("too late")
            .with_delay(Duration::from_secs(10));
        let renderer = wrap(mock.clone()).with_timeout(Duration::from_secs(1));

        let rendered = renderer.render(&request()).await.unwrap();
        assert_eq!(rendered.source, RenderSource::Fallback);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn reports_primary_name() {
        let renderer = wrap(MockQuestionRenderer::new());
        assert_eq!(renderer.name(), "mock");
    }
}
