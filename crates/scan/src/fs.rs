//! Read-only filesystem access for the walker.
//!
//! Listing failures (permissions, races with deletion) degrade to empty
//! listings: an unreadable subtree contributes zero records, never an error.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A directory's children, split into subdirectories and files, each sorted
/// by name. Entries whose name starts with the hidden-file marker are
/// dropped.
#[derive(Debug, Default)]
pub(crate) struct Listing {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Lists a directory's direct children.
pub(crate) fn list_dir(dir: &Path) -> Listing {
    let mut listing = Listing::default();
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::debug!(dir = %dir.display(), %error, "skipping unreadable directory");
            return listing;
        },
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if is_hidden(&path) {
            continue;
        }
        match entry.file_type() {
            Ok(t) if t.is_dir() => listing.dirs.push(path),
            Ok(t) if t.is_file() => listing.files.push(path),
            _ => (),
        }
    }
    listing.dirs.sort();
    listing.files.sort();
    listing
}

/// Collects every file beneath a folder, sorted, hidden names skipped.
///
/// Used when a folder-shape match claims a whole subtree as one record.
pub(crate) fn collect_files(folder: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

/// File name of a path, lossily decoded. Entries whose names are not valid
/// UTF-8 can never match a recognizer anyway.
pub(crate) fn name_of(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

fn is_hidden(path: &Path) -> bool {
    name_of(path).starts_with('.')
}
