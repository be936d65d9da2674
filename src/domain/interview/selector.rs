//! Question selection within one phase.
//!
//! Priority order:
//! 1. a matching follow-up rule of the question just answered,
//! 2. an unused deep probe when the latest answer was shallow,
//! 3. the first unused question in catalog order,
//! 4. otherwise [`Selection::Exhausted`].

use serde::Serialize;
use tracing::debug;

use super::features::ResponseFeatures;
use super::question::QuestionSpec;
use super::transcript::Transcript;
use crate::domain::foundation::QuestionId;

/// Why a question was picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionReason {
    FollowUp {
        from: QuestionId,
        depth_increment: u32,
    },
    DeepPreference,
    CatalogOrder,
}

/// Outcome of a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    Question {
        spec: &'a QuestionSpec,
        reason: SelectionReason,
    },
    /// Every question of the phase has been asked.
    Exhausted,
}

impl<'a> Selection<'a> {
    pub fn spec(&self) -> Option<&'a QuestionSpec> {
        match self {
            Selection::Question { spec, .. } => Some(spec),
            Selection::Exhausted => None,
        }
    }
}

/// Stateless selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionSelector;

impl QuestionSelector {
    pub fn new() -> Self {
        Self
    }

    /// Picks the next question from `questions`.
    ///
    /// `latest` is the feature bag of the most recent answer, or `None` when
    /// there is no answer to steer from (first question of a phase).
    pub fn select<'a>(
        &self,
        questions: &'a [QuestionSpec],
        transcript: &Transcript,
        latest: Option<&ResponseFeatures>,
    ) -> Selection<'a> {
        if let Some(selection) = self.follow_up(questions, transcript) {
            return selection;
        }

        let mut unused = questions.iter().filter(|q| !transcript.has_asked(&q.id));

        if latest.map(|f| f.depth.is_shallow()).unwrap_or(false) {
            if let Some(spec) = unused.clone().find(|q| q.is_deep_probe()) {
                debug!(question_id = %spec.id, "selected deep probe for shallow answer");
                return Selection::Question {
                    spec,
                    reason: SelectionReason::DeepPreference,
                };
            }
        }

        match unused.next() {
            Some(spec) => {
                debug!(question_id = %spec.id, "selected next question in catalog order");
                Selection::Question {
                    spec,
                    reason: SelectionReason::CatalogOrder,
                }
            }
            None => {
                debug!("phase questions exhausted");
                Selection::Exhausted
            }
        }
    }

    fn follow_up<'a>(
        &self,
        questions: &'a [QuestionSpec],
        transcript: &Transcript,
    ) -> Option<Selection<'a>> {
        let last = transcript.last()?;
        let current = questions.iter().find(|q| q.id == last.question_id)?;

        for rule in &current.follow_ups {
            if !rule.when.matches(&last.response) {
                continue;
            }
            if transcript.has_asked(&rule.target) {
                continue;
            }
            let Some(spec) = questions.iter().find(|q| q.id == rule.target) else {
                continue;
            };

            debug!(
                from = %current.id,
                question_id = %spec.id,
                depth_increment = rule.depth_increment,
                "follow-up rule matched"
            );
            return Some(Selection::Question {
                spec,
                reason: SelectionReason::FollowUp {
                    from: current.id.clone(),
                    depth_increment: rule.depth_increment,
                },
            });
        }

        None
    }
}
