//! Generic "tell me more" probes used when a phase runs out of questions.

use super::features::DepthTier;
use super::phase::InterviewPhase;
use super::question::{EvaluationFocus, Guidance, QuestionSpec};
use super::transcript::Transcript;
use crate::domain::foundation::QuestionId;

fn id_prefix(phase: InterviewPhase) -> &'static str {
    match phase {
        InterviewPhase::Opening => "generic-opening",
        InterviewPhase::Exploration => "generic-exploration",
        InterviewPhase::Metacognition => "generic-metacognition",
        InterviewPhase::Future => "generic-future",
    }
}

/// Returns the next generic probe for `phase`.
///
/// Probes are numbered per phase (`generic-exploration-1`, `-2`, ...) so a
/// probe id is never repeated within a session.
pub fn generic_probe(phase: InterviewPhase, transcript: &Transcript) -> QuestionSpec {
    let prefix = id_prefix(phase);
    let asked = transcript
        .in_phase(phase)
        .filter(|t| t.question_id.as_str().starts_with(prefix))
        .count();

    let (intent, focus, topic) = match phase {
        InterviewPhase::Opening => (
            "ice_break_more",
            EvaluationFocus::Expressiveness,
            "anything else about their day so far",
        ),
        InterviewPhase::Exploration => (
            "probe_more",
            EvaluationFocus::GenuineInterest,
            "more detail about the last thing they mentioned",
        ),
        InterviewPhase::Metacognition => (
            "reflect_more",
            EvaluationFocus::Reflection,
            "why that experience mattered to them",
        ),
        InterviewPhase::Future => (
            "future_more",
            EvaluationFocus::FutureVision,
            "what they would like to try next",
        ),
    };

    QuestionSpec {
        id: QuestionId::numbered(prefix, asked + 1),
        intent: intent.to_string(),
        focus,
        expected_depth: DepthTier::Moderate,
        prep_time_secs: None,
        guidance: Guidance {
            topic: topic.to_string(),
            tone: "open and encouraging".to_string(),
            required_elements: vec![],
            context: phase.directive().to_string(),
        },
        follow_ups: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interview::transcript::Turn;

    #[test]
    fn probe_is_tagged_with_its_phase() {
        let probe = generic_probe(InterviewPhase::Metacognition, &Transcript::new());
        assert_eq!(probe.id.as_str(), "generic-metacognition-1");
        assert_eq!(probe.focus, EvaluationFocus::Reflection);
        assert!(probe.follow_ups.is_empty());
    }

    #[test]
    fn probe_ids_are_numbered_per_phase() {
        let mut transcript = Transcript::new();
        let first = generic_probe(InterviewPhase::Exploration, &transcript);
        transcript.push(Turn::new(first.id.clone(), InterviewPhase::Exploration, "more"));

        let second = generic_probe(InterviewPhase::Exploration, &transcript);
        assert_eq!(second.id.as_str(), "generic-exploration-2");

        let other = generic_probe(InterviewPhase::Future, &transcript);
        assert_eq!(other.id.as_str(), "generic-future-1");
    }

    #[test]
    fn probe_is_deterministic() {
        let t = Transcript::new();
        assert_eq!(
            generic_probe(InterviewPhase::Opening, &t),
            generic_probe(InterviewPhase::Opening, &t)
        );
    }
}
