use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a Question, taken from the question file.
///
/// Always trimmed and never empty.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a new `QuestionId` from raw text.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if the text is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Result<Self, ParseIdError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseIdError);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({:?})", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Parsing ───────────────────────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError;

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "question id cannot be empty")
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for QuestionId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for QuestionId {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_display() {
        let id = QuestionId::new("Q-1").unwrap();
        assert_eq!(id.to_string(), "Q-1");
    }

    #[test]
    fn test_question_id_trims_whitespace() {
        let id = QuestionId::new("  Q-7  ").unwrap();
        assert_eq!(id.value(), "Q-7");
    }

    #[test]
    fn test_question_id_from_str() {
        let id: QuestionId = "GEO-042".parse().unwrap();
        assert_eq!(id, QuestionId::new("GEO-042").unwrap());
    }

    #[test]
    fn test_question_id_rejects_blank() {
        assert!(QuestionId::new("").is_err());
        assert!(QuestionId::new("   ").is_err());
        assert!("  ".parse::<QuestionId>().is_err());
    }

    #[test]
    fn test_id_roundtrip() {
        let original = QuestionId::new("Q-9").unwrap();
        let serialized = original.to_string();
        let deserialized: QuestionId = serialized.parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
