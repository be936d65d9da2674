//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionRenderer` - Turns a question specification into question text

mod question_renderer;

pub use question_renderer::{
    QuestionRenderer, RenderError, RenderRequest, RenderSource, RenderedQuestion,
};
