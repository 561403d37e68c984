use quiz_core::model::Question;

/// Presentation-agnostic view of the question currently on screen.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no answer leakage: `correct_index` and `explanation` stay behind
///
/// The UI decides how to letter or number the choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptView {
    /// 1-based position in the run.
    pub number: usize,
    pub total: usize,
    pub qid: String,
    pub stem: String,
    pub choices: Vec<String>,
}

impl PromptView {
    #[must_use]
    pub fn from_question(number: usize, total: usize, question: &Question) -> Self {
        Self {
            number,
            total,
            qid: question.id().to_string(),
            stem: question.stem().to_owned(),
            choices: question.choices().to_vec(),
        }
    }
}

/// What the player learns right after submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    /// Present only when the session is configured to explain after
    /// answering, and the question has an explanation at all.
    pub explanation: Option<String>,
}
