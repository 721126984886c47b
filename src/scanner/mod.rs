//! File discovery and content hashing.
//!
//! The scanner side of the pipeline: [`walker`] turns a root directory
//! into a stream of [`FileEntry`] values, and [`hasher`] turns a path
//! into a whole-file BLAKE3 digest. Either half failing ends the run;
//! there is no per-entry recovery in this tool.

pub mod hasher;
pub mod walker;

use std::path::PathBuf;

// Re-export main types
pub use hasher::{hash_to_hex, Hash, Hasher};
pub use walker::Walker;

/// Metadata for a discovered file.
///
/// Carries everything the grouping and deletion stages need: the path
/// and the exact byte length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path to the file, as produced by the walk
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

impl FileEntry {
    /// Create a new FileEntry.
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

/// Errors surfaced by the directory walk.
///
/// Any of these aborts the whole run: a traversal that cannot complete
/// is never partially recovered.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Access to a directory or its metadata was refused.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The scan root (or an entry beneath it) does not exist.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// Any other I/O failure during traversal.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path the failure was reported against
        path: PathBuf,
        /// Error as reported by the OS
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced while hashing a candidate file.
///
/// Hashing failures are fatal for the run as well; a candidate file
/// that cannot be read leaves the duplicate analysis incomplete.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The candidate vanished between discovery and hashing.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Read access to the candidate was refused.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Any other I/O failure while reading.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path the failure was reported against
        path: PathBuf,
        /// Error as reported by the OS
        #[source]
        source: std::io::Error,
    },
}
