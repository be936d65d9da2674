//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `renderer` - Question renderers (template, resilient wrapper, Anthropic, mock)

pub mod renderer;

pub use renderer::{
    AnthropicQuestionRenderer, AnthropicRendererConfig, MockQuestionRenderer,
    ResilientQuestionRenderer, TemplateQuestionRenderer,
};
