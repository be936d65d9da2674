//! Response feature extraction.
//!
//! Turns one candidate answer into a [`ResponseFeatures`] bag. Pure and
//! total: the same text always yields the same features, and an empty
//! answer yields `Surface` with every tag set empty.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::vocabulary::{
    count_present, matching_families, KeywordFamily, DIFFICULTY_FAMILIES, ELEMENT_FAMILIES,
    EMOTION_FAMILIES, EMOTION_MARKERS, LEARNING_FAMILIES, SOLUTION_FAMILIES,
    SPECIFICITY_MARKERS,
};

/// Length (in characters) an answer must exceed to be `Profound`.
pub const PROFOUND_MIN_CHARS: usize = 100;
/// Length (in characters) an answer must exceed to be `Deep`.
pub const DEEP_MIN_CHARS: usize = 60;
/// Length (in characters) an answer must exceed to be `Moderate`.
pub const MODERATE_MIN_CHARS: usize = 30;

/// Coarse estimate of how substantive an answer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthTier {
    Surface,
    Moderate,
    Deep,
    Profound,
}

impl DepthTier {
    /// True for the two tiers that should be steered toward deeper probes.
    pub fn is_shallow(&self) -> bool {
        matches!(self, DepthTier::Surface | DepthTier::Moderate)
    }
}

impl Default for DepthTier {
    fn default() -> Self {
        DepthTier::Surface
    }
}

impl fmt::Display for DepthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DepthTier::Surface => "surface",
            DepthTier::Moderate => "moderate",
            DepthTier::Deep => "deep",
            DepthTier::Profound => "profound",
        };
        write!(f, "{}", s)
    }
}

/// Structured features derived from a single answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFeatures {
    pub depth: DepthTier,
    pub elements: BTreeSet<String>,
    /// Element whose term occurs earliest in the answer.
    pub lead_element: Option<String>,
    pub emotions: BTreeSet<String>,
    pub difficulties: BTreeSet<String>,
    pub solutions: BTreeSet<String>,
    pub learnings: BTreeSet<String>,
}

impl ResponseFeatures {
    /// Returns true if the named element was detected.
    pub fn has_element(&self, element: &str) -> bool {
        self.elements.contains(element)
    }
}

/// Stateless extractor; all behaviour lives in the vocabulary tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseFeatureExtractor;

impl ResponseFeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Analyzes one answer.
    pub fn analyze(&self, response: &str) -> ResponseFeatures {
        let lowered = response.to_lowercase();

        ResponseFeatures {
            depth: Self::depth_of(response, &lowered),
            elements: tags(ELEMENT_FAMILIES, &lowered),
            lead_element: lead_tag(ELEMENT_FAMILIES, &lowered).map(str::to_string),
            emotions: tags(EMOTION_FAMILIES, &lowered),
            difficulties: tags(DIFFICULTY_FAMILIES, &lowered),
            solutions: tags(SOLUTION_FAMILIES, &lowered),
            learnings: tags(LEARNING_FAMILIES, &lowered),
        }
    }

    /// Depth tier of an answer.
    pub fn depth(&self, response: &str) -> DepthTier {
        Self::depth_of(response, &response.to_lowercase())
    }

    /// Element names present anywhere in `text`.
    pub fn elements(&self, text: &str) -> BTreeSet<String> {
        tags(ELEMENT_FAMILIES, &text.to_lowercase())
    }

    fn depth_of(original: &str, lowered: &str) -> DepthTier {
        let length = original.chars().count();
        let specificity = count_present(SPECIFICITY_MARKERS, lowered);
        let emotion = count_present(EMOTION_MARKERS, lowered);

        if length > PROFOUND_MIN_CHARS && specificity >= 2 && emotion >= 1 {
            DepthTier::Profound
        } else if length > DEEP_MIN_CHARS && (specificity >= 1 || emotion >= 1) {
            DepthTier::Deep
        } else if length > MODERATE_MIN_CHARS {
            DepthTier::Moderate
        } else {
            DepthTier::Surface
        }
    }
}

fn tags(table: &[KeywordFamily], lowered: &str) -> BTreeSet<String> {
    matching_families(table, lowered).map(str::to_string).collect()
}

/// Family matched first in reading order; table order breaks ties.
fn lead_tag(table: &[KeywordFamily], lowered: &str) -> Option<&'static str> {
    table
        .iter()
        .filter_map(|f| f.first_match(lowered).map(|at| (at, f.name)))
        .min_by_key(|(at, _)| *at)
        .map(|(_, name)| name)
}
