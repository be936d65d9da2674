//! Keyword vocabulary shared by the feature extractor, the phase controller
//! and the activity classifier.
//!
//! Every table here is a flat list of alternatives matched against
//! lower-cased text on word boundaries. A plain term (or phrase) must stand
//! as whole words; a term ending in `*` is a stem that only has to start a
//! word, so `"frustrat*"` covers every inflection while `"fun"` never
//! matches inside `"function"`.

/// Marks a term as a word stem.
pub const STEM_MARKER: char = '*';

/// A named family of alternative terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordFamily {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

impl KeywordFamily {
    /// Returns true if any term occurs in `lowered` (already lower-cased).
    pub fn matches(&self, lowered: &str) -> bool {
        self.terms.iter().any(|term| contains_term(lowered, term))
    }

    /// Byte offset of the earliest term occurrence in `lowered`.
    pub fn first_match(&self, lowered: &str) -> Option<usize> {
        self.terms
            .iter()
            .filter_map(|term| find_term(lowered, term))
            .min()
    }
}

/// Returns true if `term` occurs in `lowered` on word boundaries.
pub fn contains_term(lowered: &str, term: &str) -> bool {
    find_term(lowered, term).is_some()
}

/// Byte offset of the first boundary-respecting occurrence of `term`.
pub fn find_term(lowered: &str, term: &str) -> Option<usize> {
    let (needle, stem) = match term.strip_suffix(STEM_MARKER) {
        Some(stem) => (stem, true),
        None => (term, false),
    };
    if needle.is_empty() {
        return None;
    }

    lowered
        .match_indices(needle)
        .map(|(start, _)| start)
        .find(|&start| {
            let end = start + needle.len();
            let opens = lowered[..start].chars().next_back().map_or(true, is_boundary);
            let closes = stem || lowered[end..].chars().next().map_or(true, is_boundary);
            opens && closes
        })
}

fn is_boundary(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Returns the names of every family in `table` that matches `lowered`.
pub fn matching_families<'a>(
    table: &'a [KeywordFamily],
    lowered: &'a str,
) -> impl Iterator<Item = &'static str> + 'a {
    table.iter().filter(move |f| f.matches(lowered)).map(|f| f.name)
}

/// Number of distinct terms from `terms` that occur in `lowered`.
pub fn count_present(terms: &[&str], lowered: &str) -> usize {
    terms.iter().filter(|term| contains_term(lowered, term)).count()
}

/// Looks up a family by name.
pub fn family<'a>(table: &'a [KeywordFamily], name: &str) -> Option<&'a KeywordFamily> {
    table.iter().find(|f| f.name == name)
}

// ============================================================================
// Depth markers
// ============================================================================

/// Words that signal the candidate is giving concrete detail.
pub const SPECIFICITY_MARKERS: &[&str] = &[
    "specifically",
    "for example",
    "for instance",
    "actually",
    "in detail",
    "because",
    "in particular",
    "such as",
];

/// Words that signal the candidate is describing how they felt.
pub const EMOTION_MARKERS: &[&str] = &[
    "happy", "fun", "troubled", "hard", "moved", "glad", "frustrat*", "excit*", "proud", "sad",
    "worried", "nervous", "enjoy*", "surpris*",
];

// ============================================================================
// Elements
// ============================================================================

/// Element names every exploration exit must mostly cover.
pub const CORE_EXPLORATION_ELEMENTS: [&str; 4] = ["difficulty", "continuity", "discovery", "process"];

/// Semantic elements. Used both for response tagging and for phase-exit checks.
pub const ELEMENT_FAMILIES: &[KeywordFamily] = &[
    KeywordFamily {
        name: "transport",
        terms: &[
            "train", "trains", "bus", "by bus", "bicycle*", "bike*", "walk*", "by car", "station",
            "subway", "drove", "rode",
        ],
    },
    KeywordFamily {
        name: "time",
        terms: &[
            "minute*", "hour*", "o'clock", "morning*", "early", "took about", "took me", "a.m.",
            "p.m.",
        ],
    },
    KeywordFamily {
        name: "trigger",
        terms: &[
            "started", "began", "first time", "because", "got interested", "inspired",
            "the reason", "decided to",
        ],
    },
    KeywordFamily {
        name: "difficulty",
        terms: &[
            "difficult*", "hard", "harder", "problem*", "struggl*", "challeng*", "trouble*",
            "fail*", "didn't work", "obstacle*", "mistake*",
        ],
    },
    KeywordFamily {
        name: "solution",
        terms: &[
            "solved", "overcame", "overcome", "figured out", "fixed", "tried", "instead",
            "improved",
        ],
    },
    KeywordFamily {
        name: "collaboration",
        terms: &[
            "team*", "together", "friend*", "member*", "partner*", "classmate*", "cooperat*",
            "with others",
        ],
    },
    KeywordFamily {
        name: "continuity",
        terms: &[
            "every day", "every week", "daily", "kept", "continued", "for years", "for months",
            "since", "still", "regularly", "habit*",
        ],
    },
    KeywordFamily {
        name: "discovery",
        terms: &[
            "found", "discover*", "realiz*", "noticed", "turned out", "surpris*", "learned that",
        ],
    },
    KeywordFamily {
        name: "process",
        terms: &[
            "first", "then", "next", "step*", "method*", "process*", "plan", "plans", "planned",
            "planning", "experiment*", "tested", "measured", "analy*",
        ],
    },
    KeywordFamily {
        name: "learning",
        terms: &[
            "learned", "learnt", "understood", "lesson*", "taught me", "skill*", "grew",
        ],
    },
    KeywordFamily {
        name: "change",
        terms: &[
            "changed", "became", "used to", "transform*", "different person", "now i",
        ],
    },
    KeywordFamily {
        name: "future",
        terms: &[
            "future", "university", "want to", "plan to", "goal*", "dream*", "career", "someday",
            "next year",
        ],
    },
    KeywordFamily {
        name: "interest",
        terms: &[
            "interest*", "curious", "fascinat*", "love", "loved", "loves", "passion*", "like",
            "liked", "likes",
        ],
    },
];

// ============================================================================
// Tag families
// ============================================================================

pub const EMOTION_FAMILIES: &[KeywordFamily] = &[
    KeywordFamily {
        name: "joy",
        terms: &["happy", "fun", "glad", "enjoy*", "excit*", "delight*"],
    },
    KeywordFamily {
        name: "frustration",
        terms: &["frustrat*", "annoy*", "troubled", "upset", "irritat*"],
    },
    KeywordFamily {
        name: "anxiety",
        terms: &["worried", "nervous", "anxious", "afraid", "scared"],
    },
    KeywordFamily {
        name: "pride",
        terms: &["proud", "accomplish*", "confident"],
    },
    KeywordFamily {
        name: "surprise",
        terms: &["surpris*", "unexpected*", "shock*", "amaz*"],
    },
    KeywordFamily {
        name: "being_moved",
        terms: &["moved", "touched", "grateful", "thankful"],
    },
];

pub const DIFFICULTY_FAMILIES: &[KeywordFamily] = &[
    KeywordFamily {
        name: "technical",
        terms: &["didn't work", "error*", "broke*", "bug*", "fail*"],
    },
    KeywordFamily {
        name: "interpersonal",
        terms: &["disagree*", "conflict*", "argu*", "clash*", "didn't get along"],
    },
    KeywordFamily {
        name: "time_pressure",
        terms: &["deadline*", "no time", "busy", "ran out of time"],
    },
    KeywordFamily {
        name: "knowledge_gap",
        terms: &["didn't know", "didn't understand", "unfamiliar", "no idea"],
    },
    KeywordFamily {
        name: "motivation",
        terms: &["gave up", "quit", "lost motivation", "wanted to stop", "slump*"],
    },
];

pub const SOLUTION_FAMILIES: &[KeywordFamily] = &[
    KeywordFamily {
        name: "research",
        terms: &["looked up", "research*", "read", "books", "papers"],
    },
    KeywordFamily {
        name: "consultation",
        terms: &["asked", "consult*", "advice", "talked to"],
    },
    KeywordFamily {
        name: "trial_and_error",
        terms: &["tried", "trial*", "experiment*", "again and again"],
    },
    KeywordFamily {
        name: "teamwork",
        terms: &["together", "divided", "shared the", "split the work", "roles"],
    },
    KeywordFamily {
        name: "persistence",
        terms: &["kept going", "didn't give up", "continued", "persever*"],
    },
];

pub const LEARNING_FAMILIES: &[KeywordFamily] = &[
    KeywordFamily {
        name: "skill",
        terms: &["skill*", "technique*", "how to"],
    },
    KeywordFamily {
        name: "perspective",
        terms: &["realiz*", "noticed", "understood", "perspective*", "point of view"],
    },
    KeywordFamily {
        name: "self_awareness",
        terms: &["about myself", "my strength", "my weakness", "i tend to"],
    },
    KeywordFamily {
        name: "value",
        terms: &["importance of", "important", "matters", "value*"],
    },
    KeywordFamily {
        name: "collaboration",
        terms: &["working with others", "teamwork", "rely on", "listen to others"],
    },
];

// ============================================================================
// Classifier tiers
// ============================================================================

/// Four weighted keyword tiers for one category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTiers {
    /// Domain nouns (weight 4).
    pub primary: &'static [&'static str],
    /// Method / process terms (weight 3).
    pub method: &'static [&'static str],
    /// Collaboration / social terms (weight 2).
    pub social: &'static [&'static str],
    /// Affect / mindset terms (weight 1).
    pub affect: &'static [&'static str],
}

pub const COLLABORATIVE_ARTISTIC_TIERS: CategoryTiers = CategoryTiers {
    primary: &[
        "band", "bands", "orchestra*", "choir*", "theater*", "theatre*", "drama*", "danc*",
        "music*", "painting*", "artwork*", "mural*", "film*",
    ],
    method: &[
        "rehears*", "practic*", "perform*", "compos*", "choreograph*", "stage*", "concert*",
    ],
    social: &["ensemble*", "together", "team*", "members", "group*"],
    affect: &["express*", "beauty", "emotion*", "moved"],
};

pub const INDIVIDUAL_SCIENTIFIC_TIERS: CategoryTiers = CategoryTiers {
    primary: &[
        "research*", "experiment*", "science*", "biology", "chemistry", "physics", "hypothes*",
        "laborator*", "insect*", "fossil*", "astronomy",
    ],
    method: &["observ*", "measur*", "data", "analy*", "investigat*", "survey*"],
    social: &["teacher*", "mentor*", "professor*"],
    affect: &["curious", "wonder*", "why", "fascinat*"],
};

pub const COMPETITIVE_SPORTS_TIERS: CategoryTiers = CategoryTiers {
    primary: &[
        "soccer", "football", "baseball", "basketball", "tennis", "volleyball", "swim*",
        "track and field", "marathon*", "judo", "kendo", "sport*",
    ],
    method: &[
        "practic*", "training", "record*", "drill*", "match", "matches", "tournament*",
        "competition*",
    ],
    social: &["team", "teams", "teammate*", "coach*", "captain*"],
    affect: &["victor*", "defeat*", "winning", "frustrat*", "determin*"],
};

pub const SOCIAL_PROBLEM_SOLVING_TIERS: CategoryTiers = CategoryTiers {
    primary: &[
        "volunteer*", "communit*", "local", "elderly", "poverty", "environment*", "recycl*",
        "disaster*", "welfare", "region*",
    ],
    method: &[
        "interview*", "proposal*", "fieldwork", "questionnaire*", "campaign*", "survey*",
    ],
    social: &["residents", "city hall", "people", "neighbor*", "collaborat*"],
    affect: &["help*", "contribut*", "concern*", "empathy"],
};

pub const TECHNICAL_CREATIVE_TIERS: CategoryTiers = CategoryTiers {
    primary: &[
        "programming", "apps", "application*", "robot*", "software", "game*", "website*",
        "coding", "engineering", "3d print*", "electronics", "circuit*",
    ],
    method: &["design*", "prototyp*", "build*", "debug*", "develop*", "iterat*"],
    social: &["hackathon*", "users", "club*"],
    affect: &["creat*", "make", "making", "satisf*", "enjoy*"],
};

pub const LEADERSHIP_CONSENSUS_TIERS: CategoryTiers = CategoryTiers {
    primary: &[
        "student council", "committee*", "leader*", "president", "festival*", "organiz*",
        "event*",
    ],
    method: &[
        "meeting*", "discussion*", "agenda*", "vote*", "consensus", "negotiat*", "coordinat*",
    ],
    social: &["members", "everyone", "opinions", "team*"],
    affect: &["responsib*", "trust*", "listen*", "unite*"],
};
