//! Mock question renderer for testing.
//!
//! Provides a configurable implementation of the QuestionRenderer port so
//! tests can exercise fallback paths without a real collaborator.
//!
//! # Features
//!
//! - Pre-configured texts or errors, consumed in order
//! - Simulated delays for timeout testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let renderer = MockQuestionRenderer::new()
//!     .with_text("How did you get here today?")
//!     .with_delay(Duration::from_millis(100));
//!
//! let rendered = renderer.render(&request).await?;
//! assert_eq!(rendered.text, "How did you get here today?");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{QuestionRenderer, RenderError, RenderRequest, RenderSource, RenderedQuestion};

/// A configured mock outcome.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Text(String),
    Error(RenderError),
}

/// Mock renderer for testing.
#[derive(Debug, Clone)]
pub struct MockQuestionRenderer {
    /// Pre-configured outcomes (consumed in order).
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<RenderRequest>>>,
}

impl Default for MockQuestionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockQuestionRenderer {
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful text to the queue.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Text(text.into()));
        self
    }

    /// Adds an error to the queue.
    pub fn with_error(self, error: RenderError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<RenderRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn next_outcome(&self, request: &RenderRequest) -> MockOutcome {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockOutcome::Text(format!("Mock question about {}?", request.question.guidance.topic)))
    }
}

#[async_trait]
impl QuestionRenderer for MockQuestionRenderer {
    async fn render(&self, request: &RenderRequest) -> Result<RenderedQuestion, RenderError> {
        self.calls.lock().unwrap().push(request.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_outcome(request) {
            MockOutcome::Text(text) => Ok(RenderedQuestion::new(
                request,
                text,
                RenderSource::Collaborator,
            )),
            MockOutcome::Error(err) => Err(err),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
