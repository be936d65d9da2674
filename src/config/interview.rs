//! Interview decision configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::interview::vocabulary::CORE_EXPLORATION_ELEMENTS;
use crate::domain::interview::{
    PhaseThresholds, CORE_ELEMENTS_REQUIRED, DEFAULT_THRESHOLD, EXPLORATION_MIN_TURNS,
    EXPLORATION_THRESHOLD,
};

/// Interview configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InterviewConfig {
    /// YAML catalog replacing the built-in one
    pub catalog_path: Option<PathBuf>,

    /// Hard floor of answers before leaving exploration
    #[serde(default = "default_exploration_min_turns")]
    pub exploration_min_turns: usize,

    /// Element ratio required to leave exploration
    #[serde(default = "default_exploration_threshold")]
    pub exploration_threshold: f64,

    /// Element ratio required to leave other phases
    #[serde(default = "default_threshold")]
    pub default_threshold: f64,

    /// Core exploration elements that must be present
    #[serde(default = "default_core_elements_required")]
    pub core_elements_required: usize,
}

impl InterviewConfig {
    /// Controller thresholds built from this section
    pub fn thresholds(&self) -> PhaseThresholds {
        PhaseThresholds {
            exploration_min_turns: self.exploration_min_turns,
            exploration_threshold: self.exploration_threshold,
            default_threshold: self.default_threshold,
            core_elements_required: self.core_elements_required,
        }
    }

    /// Validate interview configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_ratio("exploration_threshold", self.exploration_threshold)?;
        check_ratio("default_threshold", self.default_threshold)?;

        if self.exploration_min_turns == 0 {
            return Err(ValidationError::InvalidTurnFloor);
        }

        let max = CORE_EXPLORATION_ELEMENTS.len();
        if self.core_elements_required == 0 || self.core_elements_required > max {
            return Err(ValidationError::InvalidCoreElements { max });
        }
        Ok(())
    }
}

fn check_ratio(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidThreshold { name, value })
    }
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            exploration_min_turns: default_exploration_min_turns(),
            exploration_threshold: default_exploration_threshold(),
            default_threshold: default_threshold(),
            core_elements_required: default_core_elements_required(),
        }
    }
}

fn default_exploration_min_turns() -> usize {
    EXPLORATION_MIN_TURNS
}

fn default_exploration_threshold() -> f64 {
    EXPLORATION_THRESHOLD
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_core_elements_required() -> usize {
    CORE_ELEMENTS_REQUIRED
}
