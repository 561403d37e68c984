/// Session configuration, fixed when a quiz is started.
///
/// Everything is off by default. Shuffles are applied once, before the
/// first question is shown; mid-session order never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizConfig {
    show_explanation_after_answer: bool,
    shuffle_questions: bool,
    shuffle_choices: bool,
    shuffle_seed: Option<u64>,
}

impl QuizConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal the explanation in answer feedback.
    #[must_use]
    pub fn with_show_explanation(mut self, show: bool) -> Self {
        self.show_explanation_after_answer = show;
        self
    }

    /// Permute question order at session start.
    #[must_use]
    pub fn with_shuffle_questions(mut self, shuffle: bool) -> Self {
        self.shuffle_questions = shuffle;
        self
    }

    /// Permute each question's choices at session start.
    #[must_use]
    pub fn with_shuffle_choices(mut self, shuffle: bool) -> Self {
        self.shuffle_choices = shuffle;
        self
    }

    /// Seed the shuffles for a reproducible run.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn show_explanation_after_answer(&self) -> bool {
        self.show_explanation_after_answer
    }

    #[must_use]
    pub fn shuffle_questions(&self) -> bool {
        self.shuffle_questions
    }

    #[must_use]
    pub fn shuffle_choices(&self) -> bool {
        self.shuffle_choices
    }

    #[must_use]
    pub fn shuffle_seed(&self) -> Option<u64> {
        self.shuffle_seed
    }
}
