//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for an interview session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Random v4 id, assigned when a session is opened.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Catalog identifier of a question specification (e.g. `sport-exp-3`).
///
/// Non-empty and free of whitespace so it can be logged and matched verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a new QuestionId, returning error if empty or containing whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("question_id"));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(
                "question_id",
                format!("'{}' contains whitespace", id),
            ));
        }
        Ok(Self(id))
    }

    /// Builds `<prefix>-<ordinal>` from a fixed, whitespace-free prefix.
    pub(crate) fn numbered(prefix: &'static str, ordinal: usize) -> Self {
        debug_assert!(!prefix.is_empty() && !prefix.contains(char::is_whitespace));
        Self(format!("{}-{}", prefix, ordinal))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for QuestionId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UUID: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn session_ids_are_random() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn session_id_round_trips_through_text_and_json() {
        let id: SessionId = UUID.parse().unwrap();
        assert_eq!(id.to_string(), UUID);
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{}\"", UUID));
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }

    #[test]
    fn question_id_accepts_slug() {
        let id = QuestionId::new("sport-exp-1").unwrap();
        assert_eq!(id.as_str(), "sport-exp-1");
        assert_eq!(id.to_string(), "sport-exp-1");
    }

    #[test]
    fn question_id_rejects_empty_string() {
        match QuestionId::new("") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "question_id"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn question_id_rejects_whitespace() {
        assert!(matches!(
            QuestionId::new("sport exp"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn question_id_deserialization_validates() {
        let ok: QuestionId = serde_json::from_str("\"open-1\"").unwrap();
        assert_eq!(ok.as_str(), "open-1");

        let bad: Result<QuestionId, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }
}
