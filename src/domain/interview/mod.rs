//! Interview domain module.
//!
//! The rule-based decision core of a simulated interview: activity
//! classification, response feature extraction, the question catalog,
//! question selection and phase control.

mod catalog;
mod category;
mod classifier;
mod controller;
mod engine;
mod features;
mod phase;
mod question;
mod selector;
mod session;
mod transcript;

pub mod probes;
pub mod vocabulary;

pub use catalog::{CatalogError, PhaseEntry, PhaseExitCondition, QuestionCatalog};
pub use category::Category;
pub use classifier::{ActivityClassifier, CategoryScore, MAX_SCORE};
pub use controller::{
    PhaseController, PhaseThresholds, CORE_ELEMENTS_REQUIRED, DEFAULT_THRESHOLD,
    EXPLORATION_MIN_TURNS, EXPLORATION_THRESHOLD,
};
pub use engine::{InterviewEngine, PhaseVerdict, QuestionSource, TurnDecision};
pub use features::{DepthTier, ResponseFeatureExtractor, ResponseFeatures};
pub use phase::InterviewPhase;
pub use question::{EvaluationFocus, FollowUpCondition, FollowUpRule, Guidance, QuestionSpec};
pub use selector::{QuestionSelector, Selection, SelectionReason};
pub use session::InterviewSession;
pub use transcript::{Transcript, Turn};
