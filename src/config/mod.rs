//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `INQUIRY_INTERVIEW` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use inquiry_interview::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Rendering with {:?}", config.renderer.provider);
//! ```

mod error;
mod interview;
mod logging;
mod renderer;

pub use error::{ConfigError, ValidationError};
pub use interview::InterviewConfig;
pub use logging::LoggingConfig;
pub use renderer::{RendererConfig, RendererProvider};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// template-rendered interview.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Catalog override and phase thresholds
    #[serde(default)]
    pub interview: InterviewConfig,

    /// Question renderer (template or Anthropic)
    #[serde(default)]
    pub renderer: RendererConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads `.env` (if present) and `INQUIRY_INTERVIEW__<SECTION>__<KEY>` variables.
    ///
    /// - `INQUIRY_INTERVIEW__RENDERER__TIMEOUT_SECS=3` -> `renderer.timeout_secs = 3`
    /// - `INQUIRY_INTERVIEW__INTERVIEW__CATALOG_PATH=...` -> `interview.catalog_path = ...`
    ///
    /// Missing keys fall back to defaults; only unparseable values fail.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("INQUIRY_INTERVIEW")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Range-checks every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.interview.validate()?;
        self.renderer.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
