//! Question renderer configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Renderer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    /// Which renderer phrases the questions
    #[serde(default)]
    pub provider: RendererProvider,

    /// Anthropic API key
    pub anthropic_api_key: Option<String>,

    /// Model used by the Anthropic renderer
    #[serde(default = "default_model")]
    pub model: String,

    /// Anthropic API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Time the collaborator gets per question, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Renderer type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RendererProvider {
    #[default]
    Template,
    Anthropic,
}

impl RendererConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if Anthropic is configured
    pub fn has_anthropic(&self) -> bool {
        self.anthropic_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate renderer configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 30 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.provider == RendererProvider::Anthropic && !self.has_anthropic() {
            return Err(ValidationError::MissingRequired("ANTHROPIC_API_KEY"));
        }
        Ok(())
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            provider: RendererProvider::default(),
            anthropic_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "claude-3-5-haiku-latest".to_string()
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_timeout() -> u64 {
    4
}
