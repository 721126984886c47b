//! File deletion for the interactive delete pass.
//!
//! # Overview
//!
//! Deletion is permanent (`fs::remove_file`) and tolerant per file: a
//! failure is recorded and the pass continues with the remaining
//! entries. Freed bytes count successful removals only, and failures are
//! reported separately so the final total never includes files that are
//! still on disk.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::actions::delete::delete_files;
//! use dupescan::scanner::FileEntry;
//! use std::path::PathBuf;
//!
//! let entries = vec![FileEntry::new(PathBuf::from("/tmp/dup.txt"), 5)];
//! let report = delete_files(&entries);
//! println!("{}", report.summary());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::scanner::FileEntry;

/// Errors a single removal can produce.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The file was already gone when the removal ran.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Removal was refused by the filesystem permissions.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Any other I/O failure during removal.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path the failure was reported against
        path: PathBuf,
        /// Error as reported by the OS
        #[source]
        source: io::Error,
    },
}

/// Outcome of a deletion pass.
#[derive(Debug, Clone, Default)]
pub struct DeleteReport {
    /// Paths removed, in removal order.
    pub deleted: Vec<PathBuf>,
    /// Paths that could not be removed, with the error text.
    pub failures: Vec<(PathBuf, String)>,
    /// Bytes reclaimed by the successful removals.
    pub bytes_freed: u64,
}

impl DeleteReport {
    /// How many files were removed.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.deleted.len()
    }

    /// How many removals failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Check if every deletion succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Human-readable summary of the pass.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.all_succeeded() {
            format!(
                "deleted {} file(s), freed {} bytes",
                self.success_count(),
                self.bytes_freed
            )
        } else {
            format!(
                "deleted {} file(s), {} failed, freed {} bytes",
                self.success_count(),
                self.failure_count(),
                self.bytes_freed
            )
        }
    }
}

/// Remove one file from disk.
fn delete_file(path: &Path) -> Result<(), DeleteError> {
    fs::remove_file(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => DeleteError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => DeleteError::PermissionDenied(path.to_path_buf()),
        _ => DeleteError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    })
}

/// Delete the given entries, continuing past per-file failures.
///
/// Entries are processed in order, repeated paths included: a repeated
/// entry fails on the second attempt and is recorded like any other
/// failure. Freed bytes accumulate for successful removals only.
#[must_use]
pub fn delete_files(entries: &[FileEntry]) -> DeleteReport {
    let mut report = DeleteReport::default();

    for entry in entries {
        match delete_file(&entry.path) {
            Ok(()) => {
                debug!("deleted {} ({} bytes)", entry.path.display(), entry.size);
                report.bytes_freed += entry.size;
                report.deleted.push(entry.path.clone());
            }
            Err(err) => {
                warn!("failed to delete {}: {}", entry.path.display(), err);
                report.failures.push((entry.path.clone(), err.to_string()));
            }
        }
    }

    report
}
