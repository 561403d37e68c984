#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    Citation, CitationDraft, ParseIdError, Question, QuestionBank, QuestionDraft, QuestionError,
    QuestionId, QuestionOutcome, QuizConfig, RawText, ScoreSummary,
};
