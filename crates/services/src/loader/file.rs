use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use quiz_core::model::{Question, QuestionBank, QuestionDraft, QuestionId};

use super::issue::{EntryIssue, IssueSeverity, LoadIssue};

/// Files larger than this are rejected outright.
pub const MAX_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;

/// Top-level shape of a questions file. Extra fields are ignored; entries
/// are kept as raw values so one bad entry cannot sink the rest.
#[derive(Debug, Deserialize)]
struct BankDocument {
    questions: Vec<serde_json::Value>,
}

/// Aggregate result of loading a set of question files.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Every question that validated, in load order.
    pub bank: QuestionBank,
    /// Everything that went wrong, in the order it was found.
    pub issues: Vec<LoadIssue>,
    /// Files that contributed at least one question, in load order.
    pub files: Vec<PathBuf>,
}

impl LoadReport {
    /// True when any issue is `IssueSeverity::Error`.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity() == IssueSeverity::Error)
    }
}

/// Load one questions file.
///
/// Never fails outright: file-level problems (unreadable, oversized,
/// malformed JSON, wrong shape) yield a single issue and no questions;
/// entry-level problems skip just that entry, recording its 1-based
/// position. Valid entries come back in file order.
#[must_use]
pub fn load_file(path: &Path) -> (Vec<Question>, Vec<LoadIssue>) {
    let mut issues = Vec::new();

    let size = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(source) => {
            issues.push(LoadIssue::Unreadable {
                path: path.to_path_buf(),
                source,
            });
            return (Vec::new(), issues);
        }
    };
    if size > MAX_FILE_SIZE_BYTES {
        issues.push(LoadIssue::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: MAX_FILE_SIZE_BYTES,
        });
        return (Vec::new(), issues);
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) => {
            issues.push(LoadIssue::Unreadable {
                path: path.to_path_buf(),
                source,
            });
            return (Vec::new(), issues);
        }
    };
    // Tolerate a UTF-8 byte-order mark.
    let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let value: serde_json::Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(source) => {
            issues.push(LoadIssue::MalformedJson {
                path: path.to_path_buf(),
                source,
            });
            return (Vec::new(), issues);
        }
    };
    let Ok(document) = serde_json::from_value::<BankDocument>(value) else {
        issues.push(LoadIssue::InvalidShape {
            path: path.to_path_buf(),
        });
        return (Vec::new(), issues);
    };

    let mut questions = Vec::new();
    for (index, entry) in document.questions.into_iter().enumerate() {
        let entry_number = index + 1;
        let draft = match serde_json::from_value::<QuestionDraft>(entry) {
            Ok(draft) => draft,
            Err(source) => {
                issues.push(LoadIssue::InvalidEntry {
                    path: path.to_path_buf(),
                    entry: entry_number,
                    source: EntryIssue::Decode(source),
                });
                continue;
            }
        };
        match draft.validate() {
            Ok(question) => questions.push(question),
            Err(source) => issues.push(LoadIssue::InvalidEntry {
                path: path.to_path_buf(),
                entry: entry_number,
                source: EntryIssue::Invalid(source),
            }),
        }
    }

    (questions, issues)
}

/// Load several question files into one bank.
///
/// Files are loaded in the order given and their questions concatenated.
/// A question id seen before, in this or an earlier file, adds a
/// warning-severity `LoadIssue::DuplicateId`; both copies stay in the bank.
/// An empty resulting bank is not an error here; callers decide.
pub fn load_many<I, P>(paths: I) -> LoadReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = LoadReport::default();
    let mut seen: HashSet<QuestionId> = HashSet::new();

    for path in paths {
        let path = path.as_ref();
        let (questions, mut issues) = load_file(path);
        report.issues.append(&mut issues);

        if !questions.is_empty() {
            report.files.push(path.to_path_buf());
        }
        for question in questions {
            if !seen.insert(question.id().clone()) {
                report.issues.push(LoadIssue::DuplicateId {
                    path: path.to_path_buf(),
                    id: question.id().clone(),
                });
            }
            report.bank.push(question);
        }
    }

    report
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const VALID_TWO: &str = r#"{
        "questions": [
            {"qid": "Q-1", "stem": "What is 2 + 2?", "choices": ["3", "4", "5"], "correct_index": 1},
            {"qid": "Q-2", "stem": "Pick B", "choices": ["A", "B"], "correct_index": 1, "explanation": "B it is."}
        ]
    }"#;

    #[test]
    fn valid_file_loads_every_question_with_no_issues() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "valid.json", VALID_TWO);

        let (questions, issues) = load_file(&path);

        assert!(issues.is_empty());
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id().value(), "Q-1");
        assert_eq!(questions[1].explanation(), Some("B it is."));
    }

    #[test]
    fn bad_entry_is_skipped_with_its_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "mixed.json",
            r#"{"questions": [
                {"qid": "Q-1", "stem": "ok", "choices": ["a", "b"], "correct_index": 0},
                {"qid": "Q-2", "stem": "broken", "choices": ["a", "b", "c"], "correct_index": 5},
                {"qid": "Q-3", "stem": "ok too", "choices": ["a", "b"], "correct_index": 1}
            ]}"#,
        );

        let (questions, issues) = load_file(&path);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id().value(), "Q-1");
        assert_eq!(questions[1].id().value(), "Q-3");
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0],
            LoadIssue::InvalidEntry { entry: 2, .. }
        ));
    }

    #[test]
    fn entries_missing_fields_each_get_one_issue() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "thin.json",
            r#"{"questions": [
                {"qid": "Q-1", "choices": ["a", "b"], "correct_index": 0},
                {"qid": "Q-2", "stem": "one choice only", "choices": ["a"], "correct_index": 0},
                {"qid": "Q-3", "stem": "fine", "choices": ["a", "b"], "correct_index": 0}
            ]}"#,
        );

        let (questions, issues) = load_file(&path);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id().value(), "Q-3");
        assert_eq!(issues.len(), 2);
        assert!(matches!(&issues[0], LoadIssue::InvalidEntry { entry: 1, .. }));
        assert!(matches!(&issues[1], LoadIssue::InvalidEntry { entry: 2, .. }));
        assert!(issues[0].to_string().contains("stem cannot be empty"));
        assert!(issues[1].to_string().contains("at least 2 choices"));
    }

    #[test]
    fn unparseable_entry_is_a_decode_issue() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "odd.json",
            r#"{"questions": ["not an object"]}"#,
        );

        let (questions, issues) = load_file(&path);

        assert!(questions.is_empty());
        assert!(matches!(
            &issues[0],
            LoadIssue::InvalidEntry {
                entry: 1,
                source: EntryIssue::Decode(_),
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_is_one_file_level_issue() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "broken.json", "{ not json at all");

        let (questions, issues) = load_file(&path);

        assert!(questions.is_empty());
        assert_eq!(issues.len(), 1);
        assert!(matches!(&issues[0], LoadIssue::MalformedJson { .. }));
    }

    #[test]
    fn wrong_top_level_shape_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        for contents in [r#"[1, 2, 3]"#, r#"{"items": []}"#, r#""just a string""#] {
            let path = write_file(&dir, "shape.json", contents);
            let (questions, issues) = load_file(&path);
            assert!(questions.is_empty());
            assert!(matches!(&issues[0], LoadIssue::InvalidShape { .. }));
        }
    }

    #[test]
    fn empty_questions_array_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "empty.json", r#"{"questions": []}"#);

        let (questions, issues) = load_file(&path);

        assert!(questions.is_empty());
        assert!(issues.is_empty());
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let (questions, issues) = load_file(&path);

        assert!(questions.is_empty());
        assert!(matches!(&issues[0], LoadIssue::Unreadable { .. }));
    }

    #[test]
    fn oversized_file_is_rejected_before_parsing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.json");
        let file = fs::File::create(&path).unwrap();
        file.set_len(MAX_FILE_SIZE_BYTES + 1).unwrap();

        let (questions, issues) = load_file(&path);

        assert!(questions.is_empty());
        assert!(matches!(
            &issues[0],
            LoadIssue::TooLarge { size, .. } if *size == MAX_FILE_SIZE_BYTES + 1
        ));
    }

    #[test]
    fn bom_prefixed_file_loads_like_plain_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bom.json", &format!("\u{feff}{VALID_TWO}"));

        let (questions, issues) = load_file(&path);

        assert!(issues.is_empty());
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "extra.json",
            r#"{"version": 3, "questions": [
                {"qid": "Q-1", "stem": "ok", "choices": ["a", "b"], "correct_index": 0, "difficulty": "hard"}
            ]}"#,
        );

        let (questions, issues) = load_file(&path);

        assert!(issues.is_empty());
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn load_many_preserves_file_then_entry_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_file(
            &dir,
            "first.json",
            r#"{"questions": [
                {"qid": "A-1", "stem": "s", "choices": ["x", "y"], "correct_index": 0},
                {"qid": "A-2", "stem": "s", "choices": ["x", "y"], "correct_index": 0}
            ]}"#,
        );
        let second = write_file(
            &dir,
            "second.json",
            r#"{"questions": [
                {"qid": "B-1", "stem": "s", "choices": ["x", "y"], "correct_index": 0}
            ]}"#,
        );

        let report = load_many([&first, &second]);

        assert!(report.issues.is_empty());
        let ids: Vec<&str> = report.bank.iter().map(|q| q.id().value()).collect();
        assert_eq!(ids, ["A-1", "A-2", "B-1"]);
        assert_eq!(report.files, [first, second]);
    }

    #[test]
    fn duplicate_ids_warn_but_both_copies_stay() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_file(
            &dir,
            "first.json",
            r#"{"questions": [
                {"qid": "Q-1", "stem": "original", "choices": ["x", "y"], "correct_index": 0}
            ]}"#,
        );
        let second = write_file(
            &dir,
            "second.json",
            r#"{"questions": [
                {"qid": "Q-1", "stem": "copycat", "choices": ["x", "y"], "correct_index": 1}
            ]}"#,
        );

        let report = load_many([&first, &second]);

        assert_eq!(report.bank.len(), 2);
        assert_eq!(report.issues.len(), 1);
        assert!(matches!(
            &report.issues[0],
            LoadIssue::DuplicateId { path, id }
                if path == &second && id.value() == "Q-1"
        ));
        assert_eq!(report.issues[0].severity(), IssueSeverity::Warning);
        assert!(!report.has_errors());
    }

    #[test]
    fn file_of_only_invalid_entries_yields_empty_bank() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "bad.json",
            r#"{"questions": [
                {"qid": "Q-1", "stem": "s", "choices": ["a", "b", "c"], "correct_index": 5}
            ]}"#,
        );

        let report = load_many([&path]);

        assert!(report.bank.is_empty());
        assert!(report.files.is_empty());
        assert_eq!(report.issues.len(), 1);
        assert!(report.has_errors());
    }
}
