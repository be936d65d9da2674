//! Interview engine - the composed decision core.
//!
//! Wires classifier, catalog, selector and phase controller together. The
//! engine holds no session state: every decision is a function of the
//! category, phase, transcript and depth counter passed in.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use super::catalog::QuestionCatalog;
use super::category::Category;
use super::classifier::ActivityClassifier;
use super::controller::{PhaseController, PhaseThresholds};
use super::features::{ResponseFeatureExtractor, ResponseFeatures};
use super::phase::InterviewPhase;
use super::probes::generic_probe;
use super::question::{EvaluationFocus, QuestionSpec};
use super::selector::{QuestionSelector, Selection, SelectionReason};
use super::session::InterviewSession;
use super::transcript::Transcript;

/// Phase controller verdict for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum PhaseVerdict {
    Stay {
        phase: InterviewPhase,
    },
    Advance {
        from: InterviewPhase,
        to: InterviewPhase,
    },
}

impl PhaseVerdict {
    /// The phase the next question belongs to.
    pub fn phase(&self) -> InterviewPhase {
        match self {
            PhaseVerdict::Stay { phase } => *phase,
            PhaseVerdict::Advance { to, .. } => *to,
        }
    }

    pub fn advanced(&self) -> bool {
        matches!(self, PhaseVerdict::Advance { .. })
    }
}

/// Where the next question came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum QuestionSource {
    Catalog { reason: SelectionReason },
    /// The phase was exhausted and a generic probe stands in.
    GenericProbe,
}

/// Everything the caller needs to run the next turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnDecision {
    pub verdict: PhaseVerdict,
    pub question: QuestionSpec,
    pub source: QuestionSource,
    /// Depth counter after this decision.
    pub depth_counter: u32,
    /// Features of the most recent answer, if there is one.
    pub latest_features: Option<ResponseFeatures>,
    /// Focus dimensions of the phase not yet exercised.
    pub uncovered_focuses: Vec<EvaluationFocus>,
}

impl TurnDecision {
    pub fn phase(&self) -> InterviewPhase {
        self.verdict.phase()
    }

    pub fn exhausted(&self) -> bool {
        self.source == QuestionSource::GenericProbe
    }

    /// True once the terminal phase has run out of catalog questions.
    pub fn is_final(&self) -> bool {
        self.phase() == InterviewPhase::Future && self.exhausted()
    }
}

/// Explicit, injectable component graph.
#[derive(Debug, Clone)]
pub struct InterviewEngine {
    classifier: ActivityClassifier,
    catalog: Arc<QuestionCatalog>,
    selector: QuestionSelector,
    controller: PhaseController,
    extractor: ResponseFeatureExtractor,
}

impl InterviewEngine {
    pub fn new(catalog: Arc<QuestionCatalog>, thresholds: PhaseThresholds) -> Self {
        Self::with_components(
            ActivityClassifier::new(),
            catalog,
            PhaseController::new(thresholds),
        )
    }

    pub fn with_components(
        classifier: ActivityClassifier,
        catalog: Arc<QuestionCatalog>,
        controller: PhaseController,
    ) -> Self {
        Self {
            classifier,
            catalog,
            selector: QuestionSelector::new(),
            controller,
            extractor: ResponseFeatureExtractor::new(),
        }
    }

    /// Engine over the built-in catalog with default thresholds.
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(QuestionCatalog::builtin().clone()),
            PhaseThresholds::default(),
        )
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn classify(&self, activity: &str) -> Category {
        self.classifier.classify(activity)
    }

    pub fn analyze(&self, response: &str) -> ResponseFeatures {
        self.extractor.analyze(response)
    }

    /// Classifies the activity and opens a session in the first phase.
    pub fn start(&self, activity: impl Into<String>) -> InterviewSession {
        let activity = activity.into();
        let category = self.classify(&activity);
        let session = InterviewSession::new(activity, category);
        info!(session_id = %session.id(), %category, "interview started");
        session
    }

    /// Decides the next turn of `session` without mutating it.
    pub fn next_turn(&self, session: &InterviewSession) -> TurnDecision {
        self.decide(
            session.category(),
            session.phase(),
            session.transcript(),
            session.depth_counter(),
        )
    }

    /// Decides the next turn from explicit inputs.
    pub fn decide(
        &self,
        category: Category,
        phase: InterviewPhase,
        transcript: &Transcript,
        depth_counter: u32,
    ) -> TurnDecision {
        let latest_features = transcript.last().map(|t| self.extractor.analyze(&t.response));

        let current = self.catalog.entry(category, phase);
        let verdict = match self.controller.maybe_advance(phase, transcript, &current.exit) {
            Some(to) => {
                info!(%category, from = %phase, %to, "phase advanced");
                PhaseVerdict::Advance { from: phase, to }
            }
            None => PhaseVerdict::Stay { phase },
        };

        let active = verdict.phase();
        let entry = self.catalog.entry(category, active);

        // Only an answer given in the active phase steers toward deeper probes.
        let steering = match transcript.last() {
            Some(turn) if turn.phase == active => latest_features.as_ref(),
            _ => None,
        };

        let (question, source) = match self.selector.select(&entry.questions, transcript, steering) {
            Selection::Question { spec, reason } => {
                (spec.clone(), QuestionSource::Catalog { reason })
            }
            Selection::Exhausted => (generic_probe(active, transcript), QuestionSource::GenericProbe),
        };

        let depth_counter = match &source {
            QuestionSource::Catalog {
                reason: SelectionReason::FollowUp { depth_increment, .. },
            } if !verdict.advanced() => depth_counter.saturating_add(*depth_increment),
            _ => 0,
        };

        let uncovered_focuses = self.controller.uncovered_focuses(active, entry, transcript);

        debug!(
            %category,
            phase = %active,
            question_id = %question.id,
            depth_counter,
            "turn decided"
        );

        TurnDecision {
            verdict,
            question,
            source,
            depth_counter,
            latest_features,
            uncovered_focuses,
        }
    }
}
