use std::path::{Path, PathBuf};

use thiserror::Error;

use quiz_core::model::{QuestionError, QuestionId};

/// How bad a `LoadIssue` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// Everything loaded, but the data looks suspect.
    Warning,
    /// A file or entry was skipped.
    Error,
}

/// Why a single entry inside a questions file was skipped.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EntryIssue {
    #[error("not a question object: {0}")]
    Decode(#[source] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QuestionError),
}

/// A problem found while loading question files.
///
/// Issues are accumulated rather than returned early: a bad file or entry is
/// reported and skipped, and loading moves on. `Display` gives the message a
/// presentation layer can show as-is.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadIssue {
    #[error("{}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: file is {size} bytes, limit is {limit}", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("{}: invalid JSON: {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: expected a top-level object with a \"questions\" array", path.display())]
    InvalidShape { path: PathBuf },

    #[error("{}: entry {entry}: {source}", path.display())]
    InvalidEntry {
        path: PathBuf,
        entry: usize,
        source: EntryIssue,
    },

    #[error("{}: duplicate question id \"{id}\"", path.display())]
    DuplicateId { path: PathBuf, id: QuestionId },
}

impl LoadIssue {
    /// Duplicate ids are kept and warned about; everything else means
    /// content was dropped.
    #[must_use]
    pub fn severity(&self) -> IssueSeverity {
        match self {
            LoadIssue::DuplicateId { .. } => IssueSeverity::Warning,
            _ => IssueSeverity::Error,
        }
    }

    /// The file this issue belongs to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            LoadIssue::Unreadable { path, .. }
            | LoadIssue::TooLarge { path, .. }
            | LoadIssue::MalformedJson { path, .. }
            | LoadIssue::InvalidShape { path }
            | LoadIssue::InvalidEntry { path, .. }
            | LoadIssue::DuplicateId { path, .. } => path,
        }
    }
}
