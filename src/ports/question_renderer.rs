//! Question Renderer Port - Interface for the text-generation collaborator.
//!
//! The decision core only chooses *what* to ask. Turning a [`QuestionSpec`]
//! and its guidance into a natural-language question is delegated to an
//! implementation of this port (an LLM, a template table, a test double).
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoRenderer;
//!
//! #[async_trait]
//! impl QuestionRenderer for EchoRenderer {
//!     async fn render(&self, request: &RenderRequest) -> Result<RenderedQuestion, RenderError> {
//!         Ok(RenderedQuestion::new(request, request.question.guidance.topic.clone(), RenderSource::Template))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "echo"
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Write as _;

use crate::domain::foundation::{QuestionId, SessionId};
use crate::domain::interview::{Category, InterviewPhase, QuestionSpec, TurnDecision};

/// Port for rendering question specifications into text.
#[async_trait]
pub trait QuestionRenderer: Send + Sync {
    /// Renders one question. May fail; callers decide how to fall back.
    async fn render(&self, request: &RenderRequest) -> Result<RenderedQuestion, RenderError>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}

/// Everything a renderer needs to phrase the next question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRequest {
    pub session_id: SessionId,
    pub category: Category,
    pub phase: InterviewPhase,
    pub question: QuestionSpec,
    /// Interviewer persona for the category.
    pub style_hint: String,
    /// The earliest element named in the latest answer, used to anchor the wording.
    pub keyword: Option<String>,
    pub depth_counter: u32,
}

impl RenderRequest {
    /// Builds a request from an engine decision.
    pub fn from_decision(session_id: SessionId, category: Category, decision: &TurnDecision) -> Self {
        let keyword = decision
            .latest_features
            .as_ref()
            .and_then(|f| f.lead_element.clone());

        Self {
            session_id,
            category,
            phase: decision.phase(),
            question: decision.question.clone(),
            style_hint: category.style_hint().to_string(),
            keyword,
            depth_counter: decision.depth_counter,
        }
    }

    /// Prompt text derived from the guidance bundle.
    pub fn prompt(&self) -> String {
        let guidance = &self.question.guidance;
        let mut prompt = String::new();

        let _ = writeln!(prompt, "Phase: {}. {}", self.phase, self.phase.directive());
        let _ = writeln!(prompt, "Intent: {}", self.question.intent);
        let _ = writeln!(prompt, "Topic: {}", guidance.topic);
        if !guidance.tone.is_empty() {
            let _ = writeln!(prompt, "Tone: {}", guidance.tone);
        }
        if !guidance.required_elements.is_empty() {
            let _ = writeln!(
                prompt,
                "Try to draw out: {}",
                guidance.required_elements.join(", ")
            );
        }
        if let Some(keyword) = &self.keyword {
            let _ = writeln!(prompt, "The candidate just mentioned: {}", keyword);
        }
        if self.depth_counter > 0 {
            let _ = writeln!(
                prompt,
                "This is follow-up number {} on the same thread; go one level deeper.",
                self.depth_counter
            );
        }
        if !guidance.context.is_empty() {
            let _ = writeln!(prompt, "Notes: {}", guidance.context);
        }
        prompt.push_str("Reply with a single interview question and nothing else.");
        prompt
    }
}

/// How a question's text was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderSource {
    Collaborator,
    Template,
    /// Template used because the collaborator failed or timed out.
    Fallback,
}

/// Rendered question text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedQuestion {
    pub question_id: QuestionId,
    pub text: String,
    pub source: RenderSource,
}

impl RenderedQuestion {
    pub fn new(request: &RenderRequest, text: impl Into<String>, source: RenderSource) -> Self {
        Self {
            question_id: request.question.id.clone(),
            text: text.into(),
            source,
        }
    }
}

/// Renderer errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Collaborator did not answer in time.
    #[error("render timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Collaborator is unavailable.
    #[error("renderer unavailable: {message}")]
    Unavailable { message: String },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse collaborator response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Collaborator answered with no usable text.
    #[error("renderer returned empty text")]
    EmptyOutput,

    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,
}

impl RenderError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
