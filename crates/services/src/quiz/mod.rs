mod plan;
mod progress;
mod service;
mod view;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use plan::{SessionBuilder, SessionPlan};
pub use progress::QuizProgress;
pub use service::{QuizPhase, QuizSession, RecordedAnswer};
pub use view::{AnswerFeedback, PromptView};
