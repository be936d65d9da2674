//! Property tests for the decision core.
//!
//! Classification and feature extraction are pure functions of their text,
//! and any sequence of answers keeps the session's phase moving forward
//! without asking the same question twice.

use std::collections::HashSet;

use proptest::prelude::*;

use inquiry_interview::domain::interview::{
    ActivityClassifier, InterviewEngine, InterviewPhase, ResponseFeatureExtractor, MAX_SCORE,
};

/// Answer fragments that touch (or avoid) the element vocabulary.
const FRAGMENTS: &[&str] = &[
    "",
    "ok",
    "I came by train",
    "it took about an hour",
    "I started because my friend asked me",
    "it was really hard and we failed twice",
    "then we changed the method and tested again",
    "I kept going every day for months",
    "I found out something surprising",
    "my team and I worked together",
    "I learned a lot and I think I changed",
    "in the future I want to study this at university",
    "specifically, for example, I was so happy",
];

fn arb_answer() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..4).prop_map(|parts| parts.join(". "))
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{0,200}",
        prop::collection::vec(
            prop::sample::select(vec![
                "soccer", "team", "robot", "club", "volunteer", "research", "band", "vote",
                "student council", "data", "enjoy", "practice", "and", "the",
            ]),
            0..8
        )
        .prop_map(|words| words.join(" ")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Classification never fails, is stable, and scores stay within bounds.
    #[test]
    fn prop_classification_is_total_and_deterministic(text in arb_text()) {
        let classifier = ActivityClassifier::new();
        let first = classifier.classify(&text);
        prop_assert_eq!(first, classifier.classify(&text));

        let scores = classifier.scores(&text);
        prop_assert_eq!(scores.len(), 6);
        for score in &scores {
            prop_assert!(score.score <= MAX_SCORE);
        }

        let best = scores.iter().map(|s| s.score).max().unwrap_or(0);
        let chosen = scores.iter().find(|s| s.category == first).map(|s| s.score);
        if best > 0 {
            prop_assert_eq!(chosen, Some(best));
        }
    }

    /// Feature extraction depends only on the text.
    #[test]
    fn prop_features_are_pure(text in ".{0,300}") {
        let extractor = ResponseFeatureExtractor::new();
        prop_assert_eq!(extractor.analyze(&text), extractor.analyze(&text));
        prop_assert_eq!(extractor.depth(&text), extractor.analyze(&text).depth);
    }

    /// Any sequence of answers keeps the phase monotonic and never repeats a question.
    #[test]
    fn prop_sessions_move_forward_without_repeats(
        activity in arb_text(),
        answers in prop::collection::vec(arb_answer(), 1..30),
    ) {
        let engine = InterviewEngine::builtin();
        let mut session = engine.start(activity);
        let category = session.category();
        let mut last_phase = InterviewPhase::Opening;

        for answer in answers {
            let decision = engine.next_turn(&session);
            session.apply(decision).unwrap();
            prop_assert!(session.phase() >= last_phase);
            prop_assert_eq!(session.category(), category);
            last_phase = session.phase();

            if session.is_finished() {
                break;
            }
            let id = session.pending_question().unwrap().id.clone();
            session.record_answer(&id, answer).unwrap();
        }

        let transcript = session.transcript();
        let unique: HashSet<_> = transcript.turns().iter().map(|t| &t.question_id).collect();
        prop_assert_eq!(unique.len(), transcript.len());

        for pair in transcript.turns().windows(2) {
            prop_assert!(pair[0].phase <= pair[1].phase);
        }
    }
}
