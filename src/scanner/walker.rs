//! Directory walker implementation using walkdir for sequential traversal.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree and collecting file metadata for duplicate detection. It uses
//! [`walkdir`] for a depth-first, single-threaded walk.
//!
//! The walk yields every regular file reachable from the root, optionally
//! restricted to a single file extension. Directories are descended but
//! never yielded; symlinks are not followed and never yielded. Entries
//! within each directory are visited in file-name order, so repeated
//! runs list files identically.
//!
//! Traversal errors are not recovered: the first error ends the walk and
//! the caller abandons the run.
//!
//! # Example
//!
//! ```no_run
//! use dupescan::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"));
//! for entry in walker.walk() {
//!     match entry {
//!         Ok(file) => println!("{}: {} bytes", file.path.display(), file.size),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use log::trace;
use walkdir::WalkDir;

use super::{FileEntry, ScanError};

/// Directory walker for sequential file discovery.
///
/// Yields a [`FileEntry`] for every regular file under the root, in
/// depth-first order. The optional extension filter keeps only files
/// whose extension matches exactly (case-sensitive, no leading dot).
#[derive(Debug, Clone)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Extension filter; `None` keeps every file
    extension: Option<String>,
}

impl Walker {
    /// Create a new walker for the given path, with no extension filter.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
            extension: None,
        }
    }

    /// Restrict the walk to files with the given extension.
    ///
    /// The extension is the part of the file name after its final dot,
    /// matched byte-for-byte, so `"txt"` matches `notes.txt` and the
    /// dotfile `.txt`, but not `notes.TXT`. An empty string clears the
    /// filter, keeping every file.
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = if extension.is_empty() {
            None
        } else {
            Some(extension.to_string())
        };
        self
    }

    /// Walk the tree, yielding a [`FileEntry`] per matching regular file.
    ///
    /// The iterator is lazy, finite, and non-restartable. Errors are
    /// yielded in place of entries; callers propagate the first error
    /// and abandon the traversal.
    pub fn walk(&self) -> impl Iterator<Item = Result<FileEntry, ScanError>> + '_ {
        trace!("starting walk at {}", self.root.display());

        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        return None;
                    }
                    if !self.matches_extension(entry.path()) {
                        trace!("filtered out {}", entry.path().display());
                        return None;
                    }
                    Some(
                        entry
                            .metadata()
                            .map(|meta| FileEntry::new(entry.path().to_path_buf(), meta.len()))
                            .map_err(map_walk_error),
                    )
                }
                Err(err) => Some(Err(map_walk_error(err))),
            })
    }

    /// Check whether a path passes the extension filter.
    ///
    /// The extension is the part of the file name after its final dot,
    /// so a dotfile like `.txt` has extension `txt`. A name without a
    /// dot has none and never matches.
    fn matches_extension(&self, path: &Path) -> bool {
        match &self.extension {
            None => true,
            Some(want) => path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.rsplit_once('.'))
                .is_some_and(|(_, ext)| ext == want),
        }
    }
}

/// Convert a walkdir error into a [`ScanError`], preserving the path.
fn map_walk_error(err: walkdir::Error) -> ScanError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    match err.io_error().map(io::Error::kind) {
        Some(io::ErrorKind::NotFound) => ScanError::NotFound(path),
        Some(io::ErrorKind::PermissionDenied) => ScanError::PermissionDenied(path),
        _ => ScanError::Io {
            path,
            source: err
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("directory traversal failed")),
        },
    }
}
