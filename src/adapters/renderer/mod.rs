//! Question Renderer Adapters.
//!
//! Implementations of the QuestionRenderer port.
//!
//! ## Available Adapters
//!
//! - `TemplateQuestionRenderer` - Deterministic template substitution
//! - `ResilientQuestionRenderer` - Timeout and template fallback around another renderer
//! - `AnthropicQuestionRenderer` - Anthropic Claude models
//! - `MockQuestionRenderer` - Configurable mock for testing

mod anthropic_renderer;
mod mock_renderer;
mod resilient_renderer;
mod template_renderer;

pub use anthropic_renderer::{AnthropicQuestionRenderer, AnthropicRendererConfig};
pub use mock_renderer::{MockOutcome, MockQuestionRenderer};
pub use resilient_renderer::{ResilientQuestionRenderer, DEFAULT_RENDER_TIMEOUT};
pub use template_renderer::TemplateQuestionRenderer;
