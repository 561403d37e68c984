#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod quiz;
pub mod report;

pub use error::SessionError;

pub use loader::{
    EntryIssue, IssueSeverity, LoadIssue, LoadReport, list_candidate_files,
    list_candidate_files_recursive, load_file, load_many,
};

pub use quiz::{
    AnswerFeedback, PromptView, QuizPhase, QuizProgress, QuizSession, RecordedAnswer,
    SessionBuilder, SessionPlan,
};

pub use report::render_text_report;
