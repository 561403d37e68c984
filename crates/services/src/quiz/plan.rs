use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use quiz_core::model::{Question, QuestionBank, QuizConfig};

use super::service::QuizSession;
use crate::error::SessionError;

/// Fixed presentation order for a quiz run.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub questions: Vec<Question>,
    pub config: QuizConfig,
}

impl SessionPlan {
    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns true when there is nothing to ask.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Fixes question and choice order once, before the first question is shown.
pub struct SessionBuilder {
    bank: QuestionBank,
    config: QuizConfig,
}

impl SessionBuilder {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            config: QuizConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: QuizConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the presentation order.
    ///
    /// Both shuffles draw from one generator, so a given seed fixes the
    /// whole run; without a seed the generator comes from the OS.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError::Question` if a reordered question fails to
    /// rebuild.
    pub fn build(self) -> Result<SessionPlan, SessionError> {
        let mut rng = match self.config.shuffle_seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut questions = self.bank.into_questions();
        if self.config.shuffle_questions() {
            questions.shuffle(&mut rng);
        }
        if self.config.shuffle_choices() {
            questions = questions
                .into_iter()
                .map(|question| with_shuffled_choices(&question, &mut rng))
                .collect::<Result<Vec<_>, _>>()?;
        }

        Ok(SessionPlan {
            questions,
            config: self.config,
        })
    }

    /// Build the plan and start a session over it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyBank` when the bank holds no questions.
    pub fn start(self) -> Result<QuizSession, SessionError> {
        QuizSession::new(self.build()?)
    }
}

/// Permutes one question's choices, remapping `correct_index` so it keeps
/// naming the same answer text.
fn with_shuffled_choices(
    question: &Question,
    rng: &mut StdRng,
) -> Result<Question, SessionError> {
    let mut order: Vec<usize> = (0..question.choices().len()).collect();
    order.shuffle(rng);

    let choices: Vec<String> = order
        .iter()
        .map(|&index| question.choices()[index].clone())
        .collect();
    // `order` is a permutation, so the old correct index is always present.
    let correct_index = order
        .iter()
        .position(|&index| index == question.correct_index())
        .unwrap_or_default();

    Ok(Question::new(
        question.id().clone(),
        question.stem(),
        choices,
        correct_index,
        question.explanation().map(str::to_owned),
        question.citations().to_vec(),
    )?)
}
