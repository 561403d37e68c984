use crate::model::question::Question;

/// How a single question went: what was picked, and whether it was right.
///
/// `chosen` is `None` for questions that were skipped or never reached;
/// those count as incorrect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub question: Question,
    pub chosen: Option<usize>,
    pub correct: bool,
}

/// Aggregate score over a set of question outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSummary {
    correct: usize,
    total: usize,
    outcomes: Vec<QuestionOutcome>,
}

impl ScoreSummary {
    /// Build a summary from per-question outcomes, in presentation order.
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<QuestionOutcome>) -> Self {
        let correct = outcomes.iter().filter(|outcome| outcome.correct).count();
        Self {
            correct,
            total: outcomes.len(),
            outcomes,
        }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Score as a percentage, 0.0 for an empty summary.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.correct as f64 / self.total as f64) * 100.0
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    /// Outcomes that did not score, in presentation order.
    pub fn missed(&self) -> impl Iterator<Item = &QuestionOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.correct)
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;

    fn build_outcome(qid: &str, chosen: Option<usize>) -> QuestionOutcome {
        let question = Question::new(
            QuestionId::new(qid).unwrap(),
            "stem",
            vec!["right".into(), "wrong".into()],
            0,
            None,
            Vec::new(),
        )
        .unwrap();
        let correct = chosen.is_some_and(|choice| question.is_correct(choice));
        QuestionOutcome {
            question,
            chosen,
            correct,
        }
    }

    #[test]
    fn summary_counts_correct_answers() {
        let summary = ScoreSummary::from_outcomes(vec![
            build_outcome("Q-1", Some(0)),
            build_outcome("Q-2", Some(1)),
            build_outcome("Q-3", Some(0)),
            build_outcome("Q-4", None),
        ]);

        assert_eq!(summary.correct(), 2);
        assert_eq!(summary.total(), 4);
        assert!((summary.percent() - 50.0).abs() < f64::EPSILON);
        assert!(!summary.is_perfect());
        assert_eq!(summary.missed().count(), 2);
    }

    #[test]
    fn skipped_outcomes_count_as_missed() {
        let summary = ScoreSummary::from_outcomes(vec![build_outcome("Q-1", None)]);

        assert_eq!(summary.correct(), 0);
        let missed: Vec<_> = summary.missed().collect();
        assert_eq!(missed.len(), 1);
        assert_eq!(missed[0].chosen, None);
    }

    #[test]
    fn empty_summary_is_perfect_with_zero_percent() {
        let summary = ScoreSummary::from_outcomes(Vec::new());

        assert_eq!(summary.total(), 0);
        assert!((summary.percent() - 0.0).abs() < f64::EPSILON);
        assert!(summary.is_perfect());
    }

    #[test]
    fn all_correct_is_perfect() {
        let summary = ScoreSummary::from_outcomes(vec![
            build_outcome("Q-1", Some(0)),
            build_outcome("Q-2", Some(0)),
        ]);

        assert_eq!(summary.correct(), 2);
        assert!(summary.is_perfect());
        assert!((summary.percent() - 100.0).abs() < f64::EPSILON);
    }
}
