//! Top-level error types for vidmeta
//!
//! Only usage errors and catastrophic environment errors (root path
//! inaccessible) reach this level; per-file conditions are absorbed inside
//! the services that encounter them.

use thiserror::Error;

use crate::services::scanner::ScanError;

/// Result type for top-level vidmeta operations
pub type Result<T> = std::result::Result<T, VidmetaError>;

/// Fatal error taxonomy
#[derive(Debug, Error)]
pub enum VidmetaError {
    /// Conflicting or missing command-line flags
    #[error("{0}")]
    Usage(String),

    /// Scan root missing, unreadable, or not a directory
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// I/O error on an explicitly requested path
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
