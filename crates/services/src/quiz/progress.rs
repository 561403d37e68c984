/// Aggregated view of quiz progress, useful for a status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub skipped: usize,
    pub correct: usize,
    pub remaining: usize,
    pub is_complete: bool,
}
