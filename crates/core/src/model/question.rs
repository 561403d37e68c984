use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::QuestionId;

/// Minimum number of choices a question must offer.
pub const MIN_CHOICES: usize = 2;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Why a single question record was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("missing or blank qid")]
    MissingId,

    #[error("stem cannot be empty")]
    EmptyStem,

    #[error("expected at least 2 choices, found {found}")]
    NotEnoughChoices { found: usize },

    #[error("choice {position} is empty")]
    EmptyChoice { position: usize },

    #[error("missing correct_index")]
    MissingCorrectIndex,

    #[error("correct_index {index} is out of range for {len} choices")]
    CorrectIndexOutOfRange { index: i64, len: usize },
}

//
// ─── WIRE VALUES ───────────────────────────────────────────────────────────────
//

/// A JSON value read back as text: strings stay as-is, numbers take their
/// decimal form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawText {
    Text(String),
    Int(i64),
    Float(f64),
}

impl RawText {
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            RawText::Text(text) => text,
            RawText::Int(value) => value.to_string(),
            RawText::Float(value) => value.to_string(),
        }
    }
}

//
// ─── CITATIONS ─────────────────────────────────────────────────────────────────
//

/// Wire form of a citation. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CitationDraft {
    #[serde(default)]
    pub source: Option<RawText>,
    #[serde(default)]
    pub section: Option<RawText>,
    #[serde(default)]
    pub page: Option<RawText>,
}

impl CitationDraft {
    /// Trims the fields into a `Citation`, or `None` when every field is blank.
    #[must_use]
    pub fn normalize(self) -> Option<Citation> {
        let clean = |value: Option<RawText>| {
            value
                .map(RawText::into_text)
                .map(|text| text.trim().to_owned())
                .unwrap_or_default()
        };
        let citation = Citation {
            source: clean(self.source),
            section: clean(self.section),
            page: clean(self.page),
        };
        if citation.is_empty() { None } else { Some(citation) }
    }
}

/// Pointer to the study material backing a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub source: String,
    pub section: String,
    pub page: String,
}

impl Citation {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty() && self.section.is_empty() && self.page.is_empty()
    }
}

//
// ─── QUESTION DRAFT ────────────────────────────────────────────────────────────
//

/// Wire form of a question entry, before validation.
///
/// Every field is defaulted so a missing field surfaces as a validation
/// error instead of a decode error. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub qid: Option<RawText>,
    #[serde(default)]
    pub stem: String,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub correct_index: Option<i64>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub citations: Vec<CitationDraft>,
}

impl QuestionDraft {
    /// Validates and normalizes the draft into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns the first `QuestionError` encountered.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let id = match self.qid {
            None => return Err(QuestionError::MissingId),
            Some(raw) => {
                QuestionId::new(raw.into_text()).map_err(|_| QuestionError::MissingId)?
            }
        };

        let Some(raw_index) = self.correct_index else {
            return Err(QuestionError::MissingCorrectIndex);
        };
        let correct_index =
            usize::try_from(raw_index).map_err(|_| QuestionError::CorrectIndexOutOfRange {
                index: raw_index,
                len: self.choices.len(),
            })?;

        let citations = self
            .citations
            .into_iter()
            .filter_map(CitationDraft::normalize)
            .collect();

        Question::new(
            id,
            self.stem,
            self.choices,
            correct_index,
            self.explanation,
            citations,
        )
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question.
///
/// Holds `MIN_CHOICES <= choices.len()` and `correct_index < choices.len()`
/// by construction, so lookups through the accessors never go out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    stem: String,
    choices: Vec<String>,
    correct_index: usize,
    explanation: Option<String>,
    citations: Vec<Citation>,
}

impl Question {
    /// Creates a new Question, trimming the stem and each choice.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyStem` if the stem is blank,
    /// `QuestionError::NotEnoughChoices` or `QuestionError::EmptyChoice` for
    /// bad choice lists, and `QuestionError::CorrectIndexOutOfRange` if
    /// `correct_index` does not name a choice.
    pub fn new(
        id: QuestionId,
        stem: impl Into<String>,
        choices: Vec<String>,
        correct_index: usize,
        explanation: Option<String>,
        citations: Vec<Citation>,
    ) -> Result<Self, QuestionError> {
        let stem = stem.into();
        let stem = stem.trim();
        if stem.is_empty() {
            return Err(QuestionError::EmptyStem);
        }

        if choices.len() < MIN_CHOICES {
            return Err(QuestionError::NotEnoughChoices {
                found: choices.len(),
            });
        }

        let mut trimmed = Vec::with_capacity(choices.len());
        for (index, choice) in choices.into_iter().enumerate() {
            let choice = choice.trim().to_owned();
            if choice.is_empty() {
                return Err(QuestionError::EmptyChoice {
                    position: index + 1,
                });
            }
            trimmed.push(choice);
        }

        if correct_index >= trimmed.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: i64::try_from(correct_index).unwrap_or(i64::MAX),
                len: trimmed.len(),
            });
        }

        let explanation = explanation
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());

        Ok(Self {
            id,
            stem: stem.to_owned(),
            choices: trimmed,
            correct_index,
            explanation,
            citations,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn stem(&self) -> &str {
        &self.stem
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// The choice at `index`, if there is one.
    #[must_use]
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// The text of the correct choice.
    #[must_use]
    pub fn correct_choice(&self) -> &str {
        &self.choices[self.correct_index]
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn citations(&self) -> &[Citation] {
        &self.citations
    }

    /// Whether picking `choice` answers this question correctly.
    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
