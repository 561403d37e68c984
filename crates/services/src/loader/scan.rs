use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn to_io_error(err: walkdir::Error) -> io::Error {
    match err.into_io_error() {
        Some(io_err) => io_err,
        None => io::Error::other("directory walk failed"),
    }
}

/// List the question files directly inside `dir`.
///
/// Matches the `.json` extension case-insensitively and sorts by file
/// name, also case-insensitively, so banks load in a stable order.
///
/// # Errors
///
/// Returns the underlying I/O error when `dir` cannot be read.
pub fn list_candidate_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(to_io_error)?;
        if entry.file_type().is_file() && is_json(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort_by_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
    Ok(files)
}

/// Like `list_candidate_files`, but walks the whole tree under `dir` and
/// sorts by full path.
///
/// # Errors
///
/// Returns the underlying I/O error when a directory cannot be read.
pub fn list_candidate_files_recursive(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry.map_err(to_io_error)?;
        if entry.file_type().is_file() && is_json(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort_by_key(|path| path.to_string_lossy().to_lowercase());
    Ok(files)
}
