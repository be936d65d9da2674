//! Deterministic template renderer.
//!
//! Phrases a question by substituting `{topic}` and `{keyword}` into a
//! template keyed by category and phase. Never fails, never blocks; it is
//! the fallback path when the collaborator is unavailable.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::interview::{Category, InterviewPhase};
use crate::ports::{QuestionRenderer, RenderError, RenderRequest, RenderSource, RenderedQuestion};

/// Template renderer with per-phase defaults and per-category overrides.
#[derive(Debug, Clone, Default)]
pub struct TemplateQuestionRenderer {
    overrides: HashMap<(Category, InterviewPhase), String>,
}

fn default_template(phase: InterviewPhase) -> &'static str {
    match phase {
        InterviewPhase::Opening => "Before we begin, could you tell me about {topic}?",
        InterviewPhase::Exploration => {
            "I'd like to hear more about {topic}. What stands out for you, especially around {keyword}?"
        }
        InterviewPhase::Metacognition => "Looking back now, what would you say about {topic}?",
        InterviewPhase::Future => "Thinking ahead, could you tell me about {topic}?",
    }
}

impl TemplateQuestionRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the template for one (category, phase) pair.
    pub fn with_template(
        mut self,
        category: Category,
        phase: InterviewPhase,
        template: impl Into<String>,
    ) -> Self {
        self.overrides.insert((category, phase), template.into());
        self
    }

    /// Renders synchronously.
    pub fn render_text(&self, request: &RenderRequest) -> String {
        let template = self
            .overrides
            .get(&(request.category, request.phase))
            .map(String::as_str)
            .unwrap_or_else(|| default_template(request.phase));

        let topic = request.question.guidance.topic.as_str();
        let keyword = request.keyword.as_deref().unwrap_or(topic);

        template.replace("{topic}", topic).replace("{keyword}", keyword)
    }

    /// Renders synchronously with the given source tag.
    pub fn render_as(&self, request: &RenderRequest, source: RenderSource) -> RenderedQuestion {
        RenderedQuestion::new(request, self.render_text(request), source)
    }
}

#[async_trait]
impl QuestionRenderer for TemplateQuestionRenderer {
    async fn render(&self, request: &RenderRequest) -> Result<RenderedQuestion, RenderError> {
        Ok(self.render_as(request, RenderSource::Template))
    }

    fn name(&self) -> &str {
        "template"
    }
}
