//! Plain-text result report for a finished quiz run.

use std::path::{Path, PathBuf};

use quiz_core::model::{QuestionOutcome, ScoreSummary};

const RULE_WIDTH: usize = 60;

/// Letter label for a choice position: `A`-`Z`, then 1-based numbers.
fn choice_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(offset) if offset < 26 => char::from(b'A' + offset).to_string(),
        _ => (index + 1).to_string(),
    }
}

fn file_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

fn push_missed_block(lines: &mut Vec<String>, number: usize, outcome: &QuestionOutcome) {
    let question = &outcome.question;

    lines.push(format!("Question {number} [{}]", question.id()));
    lines.push(question.stem().to_owned());
    lines.push(String::new());

    let your_answer = outcome
        .chosen
        .and_then(|choice| {
            question
                .choice(choice)
                .map(|text| format!("{}. {text}", choice_label(choice)))
        })
        .unwrap_or_else(|| "(no answer)".to_owned());
    lines.push(format!("Your answer: {your_answer}"));
    lines.push(format!(
        "Correct answer: {}. {}",
        choice_label(question.correct_index()),
        question.correct_choice()
    ));

    if let Some(explanation) = question.explanation() {
        lines.push(format!("Why: {explanation}"));
    }
    if !question.citations().is_empty() {
        lines.push("Where to study:".to_owned());
        for citation in question.citations() {
            let page_part = if citation.page.is_empty() {
                String::new()
            } else {
                format!(" | page {}", citation.page)
            };
            lines.push(format!(
                "  - {} | {}{page_part}",
                citation.source, citation.section
            ));
        }
    }

    lines.push(String::new());
    lines.push("-".repeat(RULE_WIDTH));
    lines.push(String::new());
}

/// Render the end-of-quiz report: score, then one block per missed
/// question with the correct answer and study pointers.
///
/// Skipped questions count as missed and show up as "(no answer)".
/// `files` lists the sources the questions came from; only the file
/// names are printed.
#[must_use]
pub fn render_text_report(summary: &ScoreSummary, files: &[PathBuf]) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Quiz Report".to_owned());
    lines.push(String::new());
    lines.push("Files used:".to_owned());
    for path in files {
        lines.push(format!("  - {}", file_label(path)));
    }
    lines.push(String::new());
    lines.push(format!(
        "Score: {}/{} ({:.1}%)",
        summary.correct(),
        summary.total(),
        summary.percent()
    ));
    lines.push(String::new());

    let mut had_missed = false;
    for (position, outcome) in summary.outcomes().iter().enumerate() {
        if outcome.correct {
            continue;
        }
        had_missed = true;
        push_missed_block(&mut lines, position + 1, outcome);
    }

    if !had_missed {
        lines.push("No incorrect answers to review.".to_owned());
    }

    lines.join("\n")
}
