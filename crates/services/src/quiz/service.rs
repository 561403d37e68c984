use std::fmt;

use quiz_core::model::{Question, QuestionOutcome, QuizConfig, ScoreSummary};

use super::plan::SessionPlan;
use super::progress::QuizProgress;
use super::view::{AnswerFeedback, PromptView};
use crate::error::SessionError;

//
// ─── RECORDED ANSWERS ──────────────────────────────────────────────────────────
//

/// What a session records for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedAnswer {
    /// The player picked this choice.
    Chosen(usize),
    /// The player moved on without picking a choice.
    Skipped,
}

impl RecordedAnswer {
    /// The picked choice, `None` for a skip.
    #[must_use]
    pub fn chosen(self) -> Option<usize> {
        match self {
            RecordedAnswer::Chosen(choice) => Some(choice),
            RecordedAnswer::Skipped => None,
        }
    }
}

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Completed,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory run over a fixed list of questions.
///
/// A session exists only in progress or completed; construction is the
/// start transition, and `advance()` past the last question is the finish.
/// The question order never changes after start.
pub struct QuizSession {
    questions: Vec<Question>,
    config: QuizConfig,
    current: usize,
    answers: Vec<Option<RecordedAnswer>>,
}

impl QuizSession {
    /// Start a session over the planned questions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` if the plan holds no questions.
    pub fn new(plan: SessionPlan) -> Result<Self, SessionError> {
        if plan.is_empty() {
            return Err(SessionError::EmptyBank);
        }
        let total = plan.questions.len();
        Ok(Self {
            questions: plan.questions,
            config: plan.config,
            current: 0,
            answers: vec![None; total],
        })
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// 0-based cursor; equals `total_questions()` once the session is
    /// complete.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.is_complete() {
            QuizPhase::Completed
        } else {
            QuizPhase::InProgress
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// View item for the question currently on screen, `None` once the
    /// session is complete.
    #[must_use]
    pub fn current_prompt(&self) -> Option<PromptView> {
        self.current_question().map(|question| {
            PromptView::from_question(self.current + 1, self.total_questions(), question)
        })
    }

    #[must_use]
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// What was recorded for the question at `index`, if anything yet.
    #[must_use]
    pub fn answer_for(&self, index: usize) -> Option<RecordedAnswer> {
        self.answers.get(index).copied().flatten()
    }

    /// Record an answer for the current question.
    ///
    /// Submitting again before advancing replaces the earlier pick; the
    /// last submission wins.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is finished, and
    /// `SessionError::ChoiceOutOfRange` when `choice` does not name one of
    /// the current question's choices. A rejected choice records nothing.
    pub fn submit_answer(&mut self, choice: usize) -> Result<AnswerFeedback, SessionError> {
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::Completed);
        };

        let len = question.choices().len();
        if choice >= len {
            return Err(SessionError::ChoiceOutOfRange {
                chosen: choice,
                len,
            });
        }

        self.answers[self.current] = Some(RecordedAnswer::Chosen(choice));

        let explanation = if self.config.show_explanation_after_answer() {
            question.explanation().map(str::to_owned)
        } else {
            None
        };
        Ok(AnswerFeedback {
            correct: question.is_correct(choice),
            explanation,
        })
    }

    /// Move to the next question.
    ///
    /// An unanswered current question is recorded as skipped. Advancing
    /// past the last question completes the session; advancing a completed
    /// session is a no-op. Returns the phase after the move.
    pub fn advance(&mut self) -> QuizPhase {
        if self.is_complete() {
            return QuizPhase::Completed;
        }
        if self.answers[self.current].is_none() {
            self.answers[self.current] = Some(RecordedAnswer::Skipped);
        }
        self.current += 1;
        self.phase()
    }

    /// Score the answers recorded so far.
    ///
    /// Skipped and not-yet-reached questions count as incorrect, so over a
    /// completed session this is the final result.
    #[must_use]
    pub fn score(&self) -> ScoreSummary {
        let outcomes = self
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(question, answer)| {
                let chosen = answer.and_then(RecordedAnswer::chosen);
                QuestionOutcome {
                    correct: chosen.is_some_and(|choice| question.is_correct(choice)),
                    question: question.clone(),
                    chosen,
                }
            })
            .collect();
        ScoreSummary::from_outcomes(outcomes)
    }

    /// Returns counters for the state of the run.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let answered = self
            .answers
            .iter()
            .filter(|answer| matches!(answer, Some(RecordedAnswer::Chosen(_))))
            .count();
        let skipped = self
            .answers
            .iter()
            .filter(|answer| matches!(answer, Some(RecordedAnswer::Skipped)))
            .count();
        let correct = self
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| {
                answer
                    .and_then(RecordedAnswer::chosen)
                    .is_some_and(|choice| question.is_correct(choice))
            })
            .count();

        QuizProgress {
            total: self.questions.len(),
            answered,
            skipped,
            correct,
            remaining: self.questions.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answered", &self.answers.iter().filter(|a| a.is_some()).count())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
