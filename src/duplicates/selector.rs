//! Selection parsing and index resolution.
//!
//! The user selects files for deletion by their global 1-based indices.
//! Parsing is all-or-nothing: a line with any invalid token is rejected
//! wholesale, so a partially-valid list is never applied. Resolution
//! maps a validated index back to the owning duplicate group and file.

use super::groups::DuplicateGroup;
use crate::scanner::FileEntry;

/// Errors from resolving a selection index.
#[derive(thiserror::Error, Debug)]
pub enum SelectionError {
    /// No duplicate group's index range claims the index. Validation
    /// and the assigned ranges are out of sync, which is fatal.
    #[error("internal error: index {0} is not claimed by any duplicate group")]
    IndexUnclaimed(usize),
}

/// Parse a whitespace-separated list of 1-based file indices.
///
/// Returns `None` when any token fails to parse as an integer or lies
/// outside `1..=total`; the caller re-prompts without applying anything.
/// Duplicates and ordering are preserved as entered. An empty line is a
/// valid empty selection.
#[must_use]
pub fn parse_selection(line: &str, total: usize) -> Option<Vec<usize>> {
    let mut indices = Vec::new();
    for token in line.split_whitespace() {
        let index: usize = token.parse().ok()?;
        if index == 0 || index > total {
            return None;
        }
        indices.push(index);
    }
    Some(indices)
}

/// Map a validated index back to its file.
///
/// Walks the groups in assigned order and returns the entry at the
/// matching offset, carrying the group's size. An index no group claims
/// means the assigned ranges are inconsistent with validation; the
/// caller treats that as fatal.
pub fn resolve_selection(
    groups: &[DuplicateGroup],
    index: usize,
) -> Result<FileEntry, SelectionError> {
    for group in groups {
        if let Some(offset) = index.checked_sub(group.index_start) {
            if offset < group.files.len() {
                return Ok(FileEntry::new(group.files[offset].clone(), group.size));
            }
        }
    }
    Err(SelectionError::IndexUnclaimed(index))
}
