//! Anthropic Renderer - QuestionRenderer backed by Anthropic's Messages API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AnthropicRendererConfig::new(api_key)
//!     .with_model("claude-3-5-haiku-latest")
//!     .with_base_url("https://api.anthropic.com");
//!
//! let renderer = AnthropicQuestionRenderer::new(config)?;
//! ```
//!
//! The renderer makes one attempt per question. Timeouts and fallback are
//! handled by `ResilientQuestionRenderer`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{QuestionRenderer, RenderError, RenderRequest, RenderSource, RenderedQuestion};

/// Configuration for the Anthropic renderer.
#[derive(Debug, Clone)]
pub struct AnthropicRendererConfig {
    api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    /// HTTP-level timeout. Keep it above the resilient wrapper's timeout.
    pub timeout: Duration,
    pub max_tokens: u32,
}

impl AnthropicRendererConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "claude-3-5-haiku-latest".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            timeout: Duration::from_secs(10),
            max_tokens: 200,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Anthropic API version header value.
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

pub struct AnthropicQuestionRenderer {
    config: AnthropicRendererConfig,
    client: Client,
}

impl AnthropicQuestionRenderer {
    pub fn new(config: AnthropicRendererConfig) -> Result<Self, RenderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RenderError::unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
    }

    fn to_anthropic_request(&self, request: &RenderRequest) -> AnthropicRequest {
        AnthropicRequest {
            model: self.config.model.clone(),
            system: format!(
                "You are an admissions interviewer. {} Ask exactly one question.",
                request.style_hint
            ),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: request.prompt(),
            }],
            max_tokens: self.config.max_tokens,
        }
    }

    async fn send_request(&self, request: &RenderRequest) -> Result<Response, RenderError> {
        self.client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&self.to_anthropic_request(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RenderError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    RenderError::network(format!("Connection failed: {}", e))
                } else {
                    RenderError::network(e.to_string())
                }
            })
    }

    async fn parse_response(&self, response: Response) -> Result<String, RenderError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status.as_u16(), &body));
        }

        let body: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| RenderError::parse(format!("Failed to parse response: {}", e)))?;

        extract_text(body)
    }
}

#[async_trait]
impl QuestionRenderer for AnthropicQuestionRenderer {
    async fn render(&self, request: &RenderRequest) -> Result<RenderedQuestion, RenderError> {
        let response = self.send_request(request).await?;
        let text = self.parse_response(response).await?;
        Ok(RenderedQuestion::new(request, text, RenderSource::Collaborator))
    }

    fn name(&self) -> &str {
        "anthropic"
    }
}

fn error_for_status(status: u16, body: &str) -> RenderError {
    match status {
        401 | 403 => RenderError::AuthenticationFailed,
        429 => RenderError::unavailable("rate limited"),
        500..=599 => RenderError::unavailable(format!("Server error {}: {}", status, body)),
        _ => RenderError::network(format!("Unexpected status {}: {}", status, body)),
    }
}

fn extract_text(response: AnthropicResponse) -> Result<String, RenderError> {
    let text = response
        .content
        .into_iter()
        .filter(|block| block.block_type == "text")
        .filter_map(|block| block.text)
        .collect::<Vec<_>>()
        .join("");

    let text = text.trim();
    if text.is_empty() {
        return Err(RenderError::EmptyOutput);
    }
    Ok(text.to_string())
}

// ════════════════════════════════════════════════════════════════════════════
// Anthropic API types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    system: String,
    messages: Vec<AnthropicMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use crate::domain::interview::{Category, InterviewEngine, InterviewPhase, Transcript};

    fn request() -> RenderRequest {
        let decision = InterviewEngine::builtin().decide(
            Category::IndividualScientific,
            InterviewPhase::Opening,
            &Transcript::new(),
            0,
        );
        RenderRequest::from_decision(SessionId::new(), Category::IndividualScientific, &decision)
    }

    #[test]
    fn config_builder_works() {
        let config = AnthropicRendererConfig::new("test-key")
            .with_model("claude-3-opus-20240229")
            .with_base_url("https://custom.api.com/")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "claude-3-opus-20240229");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_key(), "test-key");

        let renderer = AnthropicQuestionRenderer::new(config).unwrap();
        assert_eq!(renderer.messages_url(), "https://custom.api.com/v1/messages");
    }

    #[test]
    fn request_body_carries_style_and_prompt() {
        let renderer =
            AnthropicQuestionRenderer::new(AnthropicRendererConfig::new("k")).unwrap();
        let request = request();
        let body = serde_json::to_value(renderer.to_anthropic_request(&request)).unwrap();

        assert!(body["system"]
            .as_str()
            .unwrap()
            .contains(Category::IndividualScientific.style_hint()));
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], request.prompt());
        assert_eq!(body["max_tokens"], 200);
    }

    #[test]
    fn extracts_and_trims_text_blocks() {
        let response: AnthropicResponse = serde_json::from_str(
            r#"{"content":[{"type":"text","text":"  How did you get here today? "},{"type":"tool_use"}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "How did you get here today?");
    }

    #[test]
    fn blank_text_is_empty_output() {
        let response: AnthropicResponse =
            serde_json::from_str(r#"{"content":[{"type":"text","text":"   "}]}"#).unwrap();
        assert_eq!(extract_text(response).unwrap_err(), RenderError::EmptyOutput);
    }

    #[test]
    fn maps_http_status_to_errors() {
        assert_eq!(error_for_status(401, ""), RenderError::AuthenticationFailed);
        assert!(matches!(error_for_status(529, "overloaded"), RenderError::Unavailable { .. }));
        assert!(matches!(error_for_status(429, ""), RenderError::Unavailable { .. }));
        assert!(matches!(error_for_status(400, "bad"), RenderError::Network(_)));
    }
}
