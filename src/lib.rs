//! vidmeta library interface
//!
//! Exposes the discovery/aggregation pipeline for integration testing.
//! The binary in `main.rs` is a thin wrapper over these modules.

pub mod error;
pub mod presentation;
pub mod services;
pub mod types;

pub use crate::error::{Result, VidmetaError};

use std::path::PathBuf;

/// Operating mode selected from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Inspect a single file
    File(PathBuf),
    /// Scan a folder tree and aggregate
    Folder(PathBuf),
}

/// Validate the mutually exclusive path flags
///
/// Both flags together, or neither, is a usage error; the caller exits 1
/// without scanning anything.
pub fn resolve_mode(file_path: Option<PathBuf>, folder_path: Option<PathBuf>) -> Result<RunMode> {
    match (file_path, folder_path) {
        (Some(_), Some(_)) => Err(VidmetaError::Usage(
            "--file-path and --folder-path are mutually exclusive".to_string(),
        )),
        (Some(file), None) => Ok(RunMode::File(file)),
        (None, Some(folder)) => Ok(RunMode::Folder(folder)),
        (None, None) => Err(VidmetaError::Usage(
            "no file or folder path provided, try --help".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_flags_is_a_usage_error() {
        let result = resolve_mode(Some(PathBuf::from("/a")), Some(PathBuf::from("/b")));
        assert!(matches!(result, Err(VidmetaError::Usage(_))));
    }

    #[test]
    fn neither_flag_is_a_usage_error() {
        assert!(matches!(
            resolve_mode(None, None),
            Err(VidmetaError::Usage(_))
        ));
    }

    #[test]
    fn single_flag_selects_the_mode() {
        assert_eq!(
            resolve_mode(Some(PathBuf::from("/a")), None).unwrap(),
            RunMode::File(PathBuf::from("/a"))
        );
        assert_eq!(
            resolve_mode(None, Some(PathBuf::from("/b"))).unwrap(),
            RunMode::Folder(PathBuf::from("/b"))
        );
    }
}
