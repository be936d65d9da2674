//! Category enum representing the six thematic interviewing styles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Thematic interviewing style chosen once per session from the activity text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CollaborativeArtistic,
    IndividualScientific,
    CompetitiveSports,
    SocialProblemSolving,
    TechnicalCreative,
    LeadershipConsensus,
}

impl Category {
    /// Category used when an activity description matches no keyword at all.
    pub const FALLBACK: Category = Category::IndividualScientific;

    /// Order used only to break exact score ties, highest priority first.
    pub const TIE_BREAK_PRIORITY: [Category; 6] = [
        Category::IndividualScientific,
        Category::SocialProblemSolving,
        Category::TechnicalCreative,
        Category::CollaborativeArtistic,
        Category::CompetitiveSports,
        Category::LeadershipConsensus,
    ];

    /// Returns all categories in declaration order.
    pub fn all() -> &'static [Category] {
        &[
            Category::CollaborativeArtistic,
            Category::IndividualScientific,
            Category::CompetitiveSports,
            Category::SocialProblemSolving,
            Category::TechnicalCreative,
            Category::LeadershipConsensus,
        ]
    }

    /// Position in [`Self::TIE_BREAK_PRIORITY`] (0 = wins every tie).
    pub fn tie_break_rank(&self) -> usize {
        Self::TIE_BREAK_PRIORITY
            .iter()
            .position(|c| c == self)
            .unwrap_or(Self::TIE_BREAK_PRIORITY.len())
    }

    /// Returns the snake_case key used in catalog files and logs.
    pub fn key(&self) -> &'static str {
        match self {
            Category::CollaborativeArtistic => "collaborative_artistic",
            Category::IndividualScientific => "individual_scientific",
            Category::CompetitiveSports => "competitive_sports",
            Category::SocialProblemSolving => "social_problem_solving",
            Category::TechnicalCreative => "technical_creative",
            Category::LeadershipConsensus => "leadership_consensus",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::CollaborativeArtistic => "Collaborative / Artistic",
            Category::IndividualScientific => "Individual / Scientific",
            Category::CompetitiveSports => "Competitive / Sports",
            Category::SocialProblemSolving => "Social Problem Solving",
            Category::TechnicalCreative => "Technical / Creative",
            Category::LeadershipConsensus => "Leadership / Consensus",
        }
    }

    /// Interviewer persona handed to the text-generation collaborator.
    pub fn style_hint(&self) -> &'static str {
        match self {
            Category::CollaborativeArtistic => {
                "Warm and curious about the ensemble; draw out how the group shaped the work."
            }
            Category::IndividualScientific => {
                "Calm and precise; ask for evidence, methods and what surprised them."
            }
            Category::CompetitiveSports => {
                "Energetic coach-like tone; focus on training, setbacks and records."
            }
            Category::SocialProblemSolving => {
                "Empathetic and grounded; ask about the people affected and real change."
            }
            Category::TechnicalCreative => {
                "Hands-on maker tone; ask how things were built, broken and fixed."
            }
            Category::LeadershipConsensus => {
                "Measured and reflective; ask how agreement was reached and trust was built."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
