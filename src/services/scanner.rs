//! Folder enumerator - recursive discovery of accepted media paths
//!
//! Walks a directory tree, pre-filters by extension, and hands surviving
//! candidates to the resolver. Hidden entries are skipped, unreadable
//! entries are counted into one aggregated warning, and the walk order is
//! deterministic for a fixed filesystem state.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use super::extension_policy;
use super::resolver::CandidateResolver;
use super::signature::SignatureClassifier;

/// Folder enumeration errors
///
/// Only conditions on the root path itself are fatal; anything below it is
/// absorbed into the scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Specified root does not exist
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// Root exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Recursive scanner yielding accepted media paths
pub struct FolderScanner<C: SignatureClassifier> {
    resolver: CandidateResolver<C>,
}

impl<C: SignatureClassifier> FolderScanner<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            resolver: CandidateResolver::new(classifier),
        }
    }

    /// Scan `root` recursively for accepted media files
    ///
    /// Returns absolute paths in walk order (entries sorted by file name,
    /// so a run over an unmodified tree is reproducible). Each call
    /// re-walks the tree.
    pub fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        if !root.exists() {
            return Err(ScanError::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }

        let mut accepted = Vec::new();
        let mut unreadable = 0usize;

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("unreadable entry: {}", e);
                    unreadable += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            // Extension pre-filter keeps sniffing off the common path
            if !extension_policy::is_supported(entry.path()) {
                continue;
            }

            match self.resolver.resolve(entry.path()) {
                Ok(decision) if decision.accepted => accepted.push(decision.path),
                Ok(decision) => {
                    tracing::debug!(
                        path = %decision.path.display(),
                        reason = ?decision.reason,
                        "candidate rejected"
                    );
                }
                // Resolver I/O errors reject the candidate, never the scan
                Err(e) => {
                    tracing::debug!(path = %entry.path().display(), "resolve failed: {}", e);
                    unreadable += 1;
                }
            }
        }

        if unreadable > 0 {
            tracing::warn!(
                "skipped {} unreadable entries under {}",
                unreadable,
                root.display()
            );
        }

        Ok(accepted)
    }
}

/// Hidden entries (leading '.') are excluded; the root itself is exempt so
/// scanning a hidden directory still works
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signature::InferClassifier;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scan_nonexistent_root_is_fatal() {
        let scanner = FolderScanner::new(InferClassifier::new());
        let result = scanner.scan(Path::new("/nonexistent/media"));
        assert!(matches!(result, Err(ScanError::PathNotFound(_))));
    }

    #[test]
    fn scan_file_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("movie.mp4");
        fs::write(&file, b"").unwrap();

        let scanner = FolderScanner::new(InferClassifier::new());
        let result = scanner.scan(&file);
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn scan_empty_directory_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let scanner = FolderScanner::new(InferClassifier::new());
        assert!(scanner.scan(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn hidden_entries_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".hidden.mp4"), b"x").unwrap();
        fs::create_dir(dir.path().join(".cache")).unwrap();
        fs::write(dir.path().join(".cache/movie.mp4"), b"x").unwrap();
        fs::write(dir.path().join("visible.mp4"), b"x").unwrap();

        let scanner = FolderScanner::new(InferClassifier::new());
        let found = scanner.scan(dir.path()).unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("visible.mp4"));
    }
}
