//! Question catalog.
//!
//! Static table of `Category × Phase → PhaseEntry`. The built-in table is
//! embedded YAML; any other table (a reduced one for tests, an override
//! from disk) goes through the same loader and validation. A catalog that
//! loads is complete, so [`QuestionCatalog::entry`] never fails.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::category::Category;
use super::phase::InterviewPhase;
use super::question::{EvaluationFocus, QuestionSpec};
use super::vocabulary::{family, ELEMENT_FAMILIES};
use crate::domain::foundation::QuestionId;

const DEFAULT_CATALOG_YAML: &str = include_str!("default_catalog.yaml");

static BUILTIN: Lazy<QuestionCatalog> = Lazy::new(|| {
    QuestionCatalog::from_yaml_str(DEFAULT_CATALOG_YAML)
        .expect("embedded default catalog must be valid")
});

/// What must be true before leaving a phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseExitCondition {
    /// Minimum number of non-empty answers in the phase.
    pub min_turns: usize,
    /// Element names (see the element vocabulary) the answers should cover.
    #[serde(default)]
    pub required_elements: Vec<String>,
    /// Focus dimensions the phase is expected to exercise.
    #[serde(default)]
    pub focuses: Vec<EvaluationFocus>,
}

/// Ordered questions and exit condition for one (category, phase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseEntry {
    pub exit: PhaseExitCondition,
    pub questions: Vec<QuestionSpec>,
}

impl PhaseEntry {
    pub fn question(&self, id: &QuestionId) -> Option<&QuestionSpec> {
        self.questions.iter().find(|q| &q.id == id)
    }
}

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog yaml: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("catalog has no entry for {category}/{phase}")]
    MissingEntry {
        category: Category,
        phase: InterviewPhase,
    },

    #[error("catalog entry {category}/{phase} has no questions")]
    EmptyPhase {
        category: Category,
        phase: InterviewPhase,
    },

    #[error("question id {id} appears more than once for {category}")]
    DuplicateQuestion { category: Category, id: QuestionId },

    #[error("follow-up of {question} in {category}/{phase} targets unknown question {target}")]
    DanglingFollowUp {
        category: Category,
        phase: InterviewPhase,
        question: QuestionId,
        target: QuestionId,
    },

    #[error("{category}/{phase} references unknown element '{element}'")]
    UnknownElement {
        category: Category,
        phase: InterviewPhase,
        element: String,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: BTreeMap<Category, BTreeMap<InterviewPhase, PhaseEntry>>,
}

/// Complete, validated question table.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionCatalog {
    // Indexed by `slot(category, phase)`.
    entries: Vec<PhaseEntry>,
}

impl QuestionCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> &'static QuestionCatalog {
        &BUILTIN
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::from_table(file.categories)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Builds a catalog where every category shares the same phase entries.
    pub fn uniform(phases: BTreeMap<InterviewPhase, PhaseEntry>) -> Result<Self, CatalogError> {
        let table = Category::all()
            .iter()
            .map(|&category| (category, phases.clone()))
            .collect();
        Self::from_table(table)
    }

    fn from_table(
        mut table: BTreeMap<Category, BTreeMap<InterviewPhase, PhaseEntry>>,
    ) -> Result<Self, CatalogError> {
        let mut entries = Vec::with_capacity(Category::all().len() * InterviewPhase::all().len());

        for &category in Category::all() {
            let mut phases = table.remove(&category).unwrap_or_default();
            let mut seen = BTreeSet::new();

            for &phase in InterviewPhase::all() {
                let entry = phases
                    .remove(&phase)
                    .ok_or(CatalogError::MissingEntry { category, phase })?;
                validate_entry(category, phase, &entry, &mut seen)?;
                entries.push(entry);
            }
        }

        Ok(Self { entries })
    }

    /// The entry for `(category, phase)`.
    pub fn entry(&self, category: Category, phase: InterviewPhase) -> &PhaseEntry {
        &self.entries[slot(category, phase)]
    }
}

fn slot(category: Category, phase: InterviewPhase) -> usize {
    category as usize * InterviewPhase::all().len() + phase.order_index()
}

fn validate_entry(
    category: Category,
    phase: InterviewPhase,
    entry: &PhaseEntry,
    seen: &mut BTreeSet<QuestionId>,
) -> Result<(), CatalogError> {
    if entry.questions.is_empty() {
        return Err(CatalogError::EmptyPhase { category, phase });
    }

    for question in &entry.questions {
        if !seen.insert(question.id.clone()) {
            return Err(CatalogError::DuplicateQuestion {
                category,
                id: question.id.clone(),
            });
        }
    }

    for question in &entry.questions {
        for rule in &question.follow_ups {
            if entry.question(&rule.target).is_none() {
                return Err(CatalogError::DanglingFollowUp {
                    category,
                    phase,
                    question: question.id.clone(),
                    target: rule.target.clone(),
                });
            }
        }
    }

    let guidance_elements = entry
        .questions
        .iter()
        .flat_map(|q| q.guidance.required_elements.iter());
    for element in entry.exit.required_elements.iter().chain(guidance_elements) {
        if family(ELEMENT_FAMILIES, element).is_none() {
            return Err(CatalogError::UnknownElement {
                category,
                phase,
                element: element.clone(),
            });
        }
    }

    Ok(())
}
