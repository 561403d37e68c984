mod bank;
mod config;
mod ids;
mod question;
mod score;

pub use ids::{ParseIdError, QuestionId};

pub use question::{
    Citation, CitationDraft, MIN_CHOICES, Question, QuestionDraft, QuestionError, RawText,
};

pub use bank::QuestionBank;
pub use config::QuizConfig;
pub use score::{QuestionOutcome, ScoreSummary};
