//! Activity classifier.
//!
//! Scores an activity description against each category's four keyword
//! tiers and picks the best category. Ties are broken by
//! [`Category::TIE_BREAK_PRIORITY`]; a description with no hits at all
//! falls back to [`Category::FALLBACK`].

use serde::Serialize;
use tracing::debug;

use super::category::Category;
use super::vocabulary::{
    count_present, CategoryTiers, COLLABORATIVE_ARTISTIC_TIERS, COMPETITIVE_SPORTS_TIERS,
    INDIVIDUAL_SCIENTIFIC_TIERS, LEADERSHIP_CONSENSUS_TIERS, SOCIAL_PROBLEM_SOLVING_TIERS,
    TECHNICAL_CREATIVE_TIERS,
};

pub const PRIMARY_WEIGHT: u32 = 4;
pub const METHOD_WEIGHT: u32 = 3;
pub const SOCIAL_WEIGHT: u32 = 2;
pub const AFFECT_WEIGHT: u32 = 1;

/// Upper bound of a category score.
pub const MAX_SCORE: u32 = 10;

/// Bounded score of one category for one description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u32,
}

/// Rule-based activity classifier.
#[derive(Debug, Clone)]
pub struct ActivityClassifier {
    rules: Vec<(Category, CategoryTiers)>,
}

impl Default for ActivityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityClassifier {
    /// Creates a classifier with the built-in keyword tiers.
    pub fn new() -> Self {
        Self::with_rules(vec![
            (Category::CollaborativeArtistic, COLLABORATIVE_ARTISTIC_TIERS),
            (Category::IndividualScientific, INDIVIDUAL_SCIENTIFIC_TIERS),
            (Category::CompetitiveSports, COMPETITIVE_SPORTS_TIERS),
            (Category::SocialProblemSolving, SOCIAL_PROBLEM_SOLVING_TIERS),
            (Category::TechnicalCreative, TECHNICAL_CREATIVE_TIERS),
            (Category::LeadershipConsensus, LEADERSHIP_CONSENSUS_TIERS),
        ])
    }

    /// Creates a classifier with custom tiers. Categories without rules score 0.
    pub fn with_rules(rules: Vec<(Category, CategoryTiers)>) -> Self {
        Self { rules }
    }

    /// Scores every category, in [`Category::all`] order.
    pub fn scores(&self, activity: &str) -> Vec<CategoryScore> {
        let lowered = activity.to_lowercase();

        Category::all()
            .iter()
            .map(|&category| {
                let score = self
                    .rules
                    .iter()
                    .find(|(c, _)| *c == category)
                    .map(|(_, tiers)| score_tiers(tiers, &lowered))
                    .unwrap_or(0);
                CategoryScore { category, score }
            })
            .collect()
    }

    /// Returns the best-matching category. Never fails.
    pub fn classify(&self, activity: &str) -> Category {
        let scores = self.scores(activity);

        let best = scores
            .iter()
            .filter(|s| s.score > 0)
            .min_by_key(|s| (std::cmp::Reverse(s.score), s.category.tie_break_rank()))
            .map(|s| s.category)
            .unwrap_or(Category::FALLBACK);

        debug!(category = %best, ?scores, "classified activity");
        best
    }
}

fn score_tiers(tiers: &CategoryTiers, lowered: &str) -> u32 {
    let raw = PRIMARY_WEIGHT * count_present(tiers.primary, lowered) as u32
        + METHOD_WEIGHT * count_present(tiers.method, lowered) as u32
        + SOCIAL_WEIGHT * count_present(tiers.social, lowered) as u32
        + AFFECT_WEIGHT * count_present(tiers.affect, lowered) as u32;
    raw.min(MAX_SCORE)
}
