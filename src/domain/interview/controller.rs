//! Phase controller.
//!
//! Decides whether the interview stays in its current phase or moves to the
//! next one. Phases only move forward, and `Future` never advances.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use super::catalog::{PhaseEntry, PhaseExitCondition};
use super::features::ResponseFeatureExtractor;
use super::phase::InterviewPhase;
use super::question::EvaluationFocus;
use super::transcript::Transcript;
use super::vocabulary::CORE_EXPLORATION_ELEMENTS;

/// Non-empty answers required in exploration, whatever the catalog says.
pub const EXPLORATION_MIN_TURNS: usize = 7;
/// Element satisfaction ratio required to leave exploration.
pub const EXPLORATION_THRESHOLD: f64 = 0.9;
/// Element satisfaction ratio required to leave every other phase.
pub const DEFAULT_THRESHOLD: f64 = 0.8;
/// Core exploration elements that must be present to leave exploration.
pub const CORE_ELEMENTS_REQUIRED: usize = 3;

/// Tunable gates of the controller. Defaults are the constants above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseThresholds {
    pub exploration_min_turns: usize,
    pub exploration_threshold: f64,
    pub default_threshold: f64,
    pub core_elements_required: usize,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self {
            exploration_min_turns: EXPLORATION_MIN_TURNS,
            exploration_threshold: EXPLORATION_THRESHOLD,
            default_threshold: DEFAULT_THRESHOLD,
            core_elements_required: CORE_ELEMENTS_REQUIRED,
        }
    }
}

impl PhaseThresholds {
    fn ratio_for(&self, phase: InterviewPhase) -> f64 {
        match phase {
            InterviewPhase::Exploration => self.exploration_threshold,
            _ => self.default_threshold,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PhaseController {
    thresholds: PhaseThresholds,
    extractor: ResponseFeatureExtractor,
}

impl PhaseController {
    pub fn new(thresholds: PhaseThresholds) -> Self {
        Self {
            thresholds,
            extractor: ResponseFeatureExtractor::new(),
        }
    }

    pub fn thresholds(&self) -> &PhaseThresholds {
        &self.thresholds
    }

    /// Returns the phase to move to, or `None` to stay.
    ///
    /// Only answers given in `phase` count toward its exit condition.
    pub fn maybe_advance(
        &self,
        phase: InterviewPhase,
        transcript: &Transcript,
        exit: &PhaseExitCondition,
    ) -> Option<InterviewPhase> {
        let answered = transcript.answered_in_phase(phase);
        let mut min_turns = exit.min_turns;
        if phase == InterviewPhase::Exploration {
            min_turns = min_turns.max(self.thresholds.exploration_min_turns);
        }
        if answered < min_turns {
            debug!(%phase, answered, min_turns, "staying: not enough answers");
            return None;
        }

        let present = self.extractor.elements(&transcript.phase_text(phase));

        let ratio = satisfaction_ratio(&exit.required_elements, &present);
        let threshold = self.thresholds.ratio_for(phase);
        if ratio < threshold {
            debug!(%phase, ratio, threshold, "staying: required elements missing");
            return None;
        }

        if phase == InterviewPhase::Exploration {
            let core = CORE_EXPLORATION_ELEMENTS
                .iter()
                .filter(|e| present.contains(**e))
                .count();
            if core < self.thresholds.core_elements_required {
                debug!(%phase, core, "staying: core exploration elements missing");
                return None;
            }
        }

        let next = phase.next();
        debug!(%phase, ?next, ratio, "exit condition met");
        next
    }

    /// Focus dimensions of `entry` not yet exercised by a question asked in `phase`.
    pub fn uncovered_focuses(
        &self,
        phase: InterviewPhase,
        entry: &PhaseEntry,
        transcript: &Transcript,
    ) -> Vec<EvaluationFocus> {
        let covered: BTreeSet<EvaluationFocus> = transcript
            .in_phase(phase)
            .filter_map(|turn| entry.question(&turn.question_id))
            .map(|q| q.focus)
            .collect();

        entry
            .exit
            .focuses
            .iter()
            .filter(|f| !covered.contains(*f))
            .copied()
            .collect()
    }
}

/// `matched / required`; an empty requirement is fully satisfied.
fn satisfaction_ratio(required: &[String], present: &BTreeSet<String>) -> f64 {
    if required.is_empty() {
        return 1.0;
    }
    let matched = required.iter().filter(|e| present.contains(*e)).count();
    matched as f64 / required.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::QuestionId;
    use crate::domain::interview::transcript::Turn;

    fn exit(min_turns: usize, required: &[&str]) -> PhaseExitCondition {
        PhaseExitCondition {
            min_turns,
            required_elements: required.iter().map(|s| s.to_string()).collect(),
            focuses: vec![],
        }
    }

    fn transcript(phase: InterviewPhase, answers: &[&str]) -> Transcript {
        answers
            .iter()
            .enumerate()
            .map(|(i, text)| {
                Turn::new(QuestionId::new(format!("q-{}", i)).unwrap(), phase, *text)
            })
            .collect()
    }

    const EXPLORATION_ANSWERS: [&str; 7] = [
        "I started because my friend invited me.",
        "It was difficult at first.",
        "We practiced every day after school.",
        "First we stretched, then we ran drills.",
        "I noticed my timing got better.",
        "I still go to practice now.",
        "The coach showed me a new method.",
    ];

    fn exploration_exit() -> PhaseExitCondition {
        exit(5, &["trigger", "difficulty", "process", "continuity", "discovery"])
    }

    mod opening {
        use super::*;

        #[test]
        fn advances_with_enough_turns_and_elements() {
            let t = transcript(
                InterviewPhase::Opening,
                &["I came by train.", "It took about forty minutes.", "A bit nervous."],
            );
            let next = PhaseController::default().maybe_advance(
                InterviewPhase::Opening,
                &t,
                &exit(3, &["transport", "time"]),
            );
            assert_eq!(next, Some(InterviewPhase::Exploration));
        }

        #[test]
        fn stays_below_min_turns() {
            let t = transcript(InterviewPhase::Opening, &["By train.", "About an hour."]);
            let next = PhaseController::default().maybe_advance(
                InterviewPhase::Opening,
                &t,
                &exit(3, &["transport", "time"]),
            );
            assert_eq!(next, None);
        }

        #[test]
        fn empty_answers_do_not_count() {
            let t = transcript(InterviewPhase::Opening, &["By train.", "About an hour.", "  "]);
            let next = PhaseController::default().maybe_advance(
                InterviewPhase::Opening,
                &t,
                &exit(3, &["transport", "time"]),
            );
            assert_eq!(next, None);
        }

        #[test]
        fn stays_when_ratio_is_below_default_threshold() {
            // 1 of 2 elements = 0.5
            let t = transcript(InterviewPhase::Opening, &["By train.", "Fine.", "Okay."]);
            let next = PhaseController::default().maybe_advance(
                InterviewPhase::Opening,
                &t,
                &exit(3, &["transport", "time"]),
            );
            assert_eq!(next, None);
        }

        #[test]
        fn look_alike_words_do_not_satisfy_elements() {
            // "erode" is not "rode", "nearly" is not "early"
            let t = transcript(
                InterviewPhase::Opening,
                &["The coast may erode.", "It was nearly over.", "Okay."],
            );
            let next = PhaseController::default().maybe_advance(
                InterviewPhase::Opening,
                &t,
                &exit(3, &["transport", "time"]),
            );
            assert_eq!(next, None);
        }

        #[test]
        fn answers_from_other_phases_are_ignored() {
            let mut t = transcript(InterviewPhase::Exploration, &["By train.", "An hour.", "Yes."]);
            t.push(Turn::new(
                QuestionId::new("open-1").unwrap(),
                InterviewPhase::Opening,
                "By train.",
            ));
            let next = PhaseController::default().maybe_advance(
                InterviewPhase::Opening,
                &t,
                &exit(3, &["transport", "time"]),
            );
            assert_eq!(next, None);
        }
    }

    mod exploration {
        use super::*;

        #[test]
        fn six_turns_never_leave_exploration() {
            let t = transcript(InterviewPhase::Exploration, &EXPLORATION_ANSWERS[..6]);
            let next = PhaseController::default().maybe_advance(
                InterviewPhase::Exploration,
                &t,
                &exploration_exit(),
            );
            assert_eq!(next, None);
        }

        #[test]
        fn seven_turns_with_core_elements_advance() {
            let t = transcript(InterviewPhase::Exploration, &EXPLORATION_ANSWERS);
            let next = PhaseController::default().maybe_advance(
                InterviewPhase::Exploration,
                &t,
                &exploration_exit(),
            );
            assert_eq!(next, Some(InterviewPhase::Metacognition));
        }

        #[test]
        fn ratio_of_eighty_percent_is_not_enough() {
            // Drop the only "discovery" answer: 4 of 5 elements = 0.8 < 0.9.
            let mut answers = EXPLORATION_ANSWERS.to_vec();
            answers[4] = "My timing got better.";
            let t = transcript(InterviewPhase::Exploration, &answers);
            let next = PhaseController::default().maybe_advance(
                InterviewPhase::Exploration,
                &t,
                &exploration_exit(),
            );
            assert_eq!(next, None);
        }

        #[test]
        fn core_elements_gate_applies_even_when_ratio_passes() {
            // Only "trigger" is required, but two core elements are missing.
            let answers = [
                "I started because my friend invited me.",
                "It was difficult at first.",
                "Then it got easier.",
                "Okay.",
                "Okay.",
                "Okay.",
                "Okay.",
            ];
            let t = transcript(InterviewPhase::Exploration, &answers);
            let next = PhaseController::default().maybe_advance(
                InterviewPhase::Exploration,
                &t,
                &exit(5, &["trigger"]),
            );
            assert_eq!(next, None);
        }

        #[test]
        fn floor_is_configurable() {
            let controller = PhaseController::new(PhaseThresholds {
                exploration_min_turns: 5,
                ..PhaseThresholds::default()
            });
            let t = transcript(
                InterviewPhase::Exploration,
                &[
                    "I started because my friend invited me.",
                    "It was difficult at first.",
                    "We practiced every day after school.",
                    "First we stretched, then we ran drills.",
                    "I noticed my timing got better.",
                ],
            );
            assert_eq!(
                controller.maybe_advance(InterviewPhase::Exploration, &t, &exploration_exit()),
                Some(InterviewPhase::Metacognition)
            );
        }
    }

    mod terminal {
        use super::*;

        #[test]
        fn future_never_advances() {
            let t = transcript(
                InterviewPhase::Future,
                &["I want to study this at university.", "I love it."],
            );
            let next = PhaseController::default().maybe_advance(
                InterviewPhase::Future,
                &t,
                &exit(2, &["future", "interest"]),
            );
            assert_eq!(next, None);
        }

        #[test]
        fn empty_requirement_is_satisfied() {
            let t = transcript(InterviewPhase::Metacognition, &["a", "b", "c"]);
            let next = PhaseController::default().maybe_advance(
                InterviewPhase::Metacognition,
                &t,
                &exit(3, &[]),
            );
            assert_eq!(next, Some(InterviewPhase::Future));
        }
    }

    mod focuses {
        use super::*;
        use crate::domain::interview::catalog::QuestionCatalog;
        use crate::domain::interview::category::Category;

        #[test]
        fn reports_focuses_not_yet_asked() {
            let entry = QuestionCatalog::builtin()
                .entry(Category::CompetitiveSports, InterviewPhase::Exploration);
            let controller = PhaseController::default();

            let none_asked = controller.uncovered_focuses(
                InterviewPhase::Exploration,
                entry,
                &Transcript::new(),
            );
            assert_eq!(none_asked, entry.exit.focuses);

            let t: Transcript = vec![Turn::new(
                QuestionId::new("sport-exp-6").unwrap(),
                InterviewPhase::Exploration,
                "We cheered each other on.",
            )]
            .into_iter()
            .collect();
            let remaining = controller.uncovered_focuses(InterviewPhase::Exploration, entry, &t);
            assert!(!remaining.contains(&EvaluationFocus::Collaboration));
            assert!(remaining.contains(&EvaluationFocus::Perseverance));
        }
    }
}
