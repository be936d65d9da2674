//! Question specifications.
//!
//! A [`QuestionSpec`] describes what to ask and why, independent of its
//! final wording. Wording is produced by a `QuestionRenderer` from the
//! [`Guidance`] bundle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::features::DepthTier;
use super::vocabulary::{contains_term, family, ELEMENT_FAMILIES};
use crate::domain::foundation::QuestionId;

/// Rubric dimension a question is designed to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationFocus {
    GenuineInterest,
    SelfTransformation,
    Initiative,
    Collaboration,
    Perseverance,
    Reflection,
    Expressiveness,
    FutureVision,
}

impl EvaluationFocus {
    pub fn all() -> &'static [EvaluationFocus] {
        &[
            EvaluationFocus::GenuineInterest,
            EvaluationFocus::SelfTransformation,
            EvaluationFocus::Initiative,
            EvaluationFocus::Collaboration,
            EvaluationFocus::Perseverance,
            EvaluationFocus::Reflection,
            EvaluationFocus::Expressiveness,
            EvaluationFocus::FutureVision,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            EvaluationFocus::GenuineInterest => "genuine_interest",
            EvaluationFocus::SelfTransformation => "self_transformation",
            EvaluationFocus::Initiative => "initiative",
            EvaluationFocus::Collaboration => "collaboration",
            EvaluationFocus::Perseverance => "perseverance",
            EvaluationFocus::Reflection => "reflection",
            EvaluationFocus::Expressiveness => "expressiveness",
            EvaluationFocus::FutureVision => "future_vision",
        }
    }
}

impl fmt::Display for EvaluationFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Material the text generator turns into a question. Never rendered here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guidance {
    pub topic: String,
    #[serde(default)]
    pub tone: String,
    #[serde(default)]
    pub required_elements: Vec<String>,
    #[serde(default)]
    pub context: String,
}

/// Condition tested against the latest answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FollowUpCondition {
    /// Any of the terms occurs in the answer as whole words (case-insensitive).
    /// A trailing `*` makes a term a word stem.
    ContainsAny { terms: Vec<String> },
    /// The named element family matches the answer.
    HasElement { element: String },
    /// The answer has fewer than `chars` characters.
    ShorterThan { chars: usize },
}

impl FollowUpCondition {
    pub fn matches(&self, response: &str) -> bool {
        match self {
            FollowUpCondition::ContainsAny { terms } => {
                let lowered = response.to_lowercase();
                terms
                    .iter()
                    .any(|term| contains_term(&lowered, &term.to_lowercase()))
            }
            FollowUpCondition::HasElement { element } => family(ELEMENT_FAMILIES, element)
                .map(|f| f.matches(&response.to_lowercase()))
                .unwrap_or(false),
            FollowUpCondition::ShorterThan { chars } => response.chars().count() < *chars,
        }
    }
}

/// A condition, the question it leads to, and how much it deepens the thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpRule {
    pub when: FollowUpCondition,
    pub target: QuestionId,
    #[serde(default = "default_depth_increment")]
    pub depth_increment: u32,
}

fn default_depth_increment() -> u32 {
    1
}

/// Structured description of one catalog question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub id: QuestionId,
    /// Conversational purpose, e.g. `probe_difficulty`.
    pub intent: String,
    pub focus: EvaluationFocus,
    pub expected_depth: DepthTier,
    #[serde(default)]
    pub prep_time_secs: Option<u32>,
    pub guidance: Guidance,
    #[serde(default)]
    pub follow_ups: Vec<FollowUpRule>,
}

impl QuestionSpec {
    /// True if the question is meant to draw out a `Deep` or `Profound` answer.
    pub fn is_deep_probe(&self) -> bool {
        !self.expected_depth.is_shallow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod conditions {
        use super::*;

        #[test]
        fn contains_any_is_case_insensitive() {
            let cond = FollowUpCondition::ContainsAny {
                terms: vec!["Coach".to_string(), "captain".to_string()],
            };
            assert!(cond.matches("my COACH told me to rest"));
            assert!(!cond.matches("I rested"));
        }

        #[test]
        fn contains_any_respects_word_boundaries() {
            let cond = FollowUpCondition::ContainsAny {
                terms: vec!["bug*".to_string(), "error".to_string()],
            };
            assert!(cond.matches("We hit bugs all week"));
            assert!(cond.matches("an error, again"));
            assert!(!cond.matches("the debugger helped"));
            assert!(!cond.matches("a few errors"));
        }

        #[test]
        fn has_element_uses_shared_vocabulary() {
            let cond = FollowUpCondition::HasElement {
                element: "difficulty".to_string(),
            };
            assert!(cond.matches("It was really hard to keep up"));
            assert!(!cond.matches("It went well"));
        }

        #[test]
        fn unknown_element_never_matches() {
            let cond = FollowUpCondition::HasElement {
                element: "weather".to_string(),
            };
            assert!(!cond.matches("it rained"));
        }

        #[test]
        fn shorter_than_counts_characters() {
            let cond = FollowUpCondition::ShorterThan { chars: 5 };
            assert!(cond.matches("abcd"));
            assert!(!cond.matches("abcde"));
            assert!(cond.matches("ああああ"));
        }
    }

    mod serde_shape {
        use super::*;

        #[test]
        fn deserializes_question_with_follow_up() {
            let yaml = r#"
id: exp-1
intent: probe_trigger
focus: genuine_interest
expected_depth: moderate
guidance:
  topic: how it started
follow_ups:
  - when: { kind: has_element, element: difficulty }
    target: exp-3
    depth_increment: 2
  - when: { kind: shorter_than, chars: 20 }
    target: exp-2
"#;
            let spec: QuestionSpec = serde_yaml::from_str(yaml).unwrap();
            assert_eq!(spec.id.as_str(), "exp-1");
            assert_eq!(spec.focus, EvaluationFocus::GenuineInterest);
            assert_eq!(spec.expected_depth, DepthTier::Moderate);
            assert_eq!(spec.prep_time_secs, None);
            assert_eq!(spec.follow_ups.len(), 2);
            assert_eq!(spec.follow_ups[0].depth_increment, 2);
            assert_eq!(spec.follow_ups[1].depth_increment, 1);
            assert_eq!(
                spec.follow_ups[1].when,
                FollowUpCondition::ShorterThan { chars: 20 }
            );
        }

        #[test]
        fn rejects_empty_question_id() {
            let yaml = "id: ''\nintent: x\nfocus: reflection\nexpected_depth: deep\nguidance: { topic: t }\n";
            assert!(serde_yaml::from_str::<QuestionSpec>(yaml).is_err());
        }
    }

    #[test]
    fn deep_probe_covers_deep_and_profound() {
        let yaml = "id: q\nintent: x\nfocus: reflection\nexpected_depth: profound\nguidance: { topic: t }\n";
        let spec: QuestionSpec = serde_yaml::from_str(yaml).unwrap();
        assert!(spec.is_deep_probe());
    }

    #[test]
    fn focus_keys_are_unique() {
        let mut keys: Vec<_> = EvaluationFocus::all().iter().map(|f| f.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 8);
    }
}
