//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::QuestionError;

/// Errors emitted by quiz sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    EmptyBank,
    #[error("session already completed")]
    Completed,
    #[error("choice {chosen} is out of range for {len} choices")]
    ChoiceOutOfRange { chosen: usize, len: usize },
    #[error(transparent)]
    Question(#[from] QuestionError),
}
