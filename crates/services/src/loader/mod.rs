mod file;
mod issue;
mod scan;

// Public API of the loader subsystem.
pub use file::{LoadReport, MAX_FILE_SIZE_BYTES, load_file, load_many};
pub use issue::{EntryIssue, IssueSeverity, LoadIssue};
pub use scan::{list_candidate_files, list_candidate_files_recursive};
