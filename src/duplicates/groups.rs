//! Size grouping, sorting, and duplicate grouping.
//!
//! # Overview
//!
//! This module implements the grouping stages of the pipeline. Files are
//! first grouped by exact size, since files of different sizes cannot be
//! duplicates; singleton sizes drop out immediately. Size groups are
//! then sorted by a user-chosen direction, and finally each group is
//! re-bucketed by content digest to confirm true duplicates.
//!
//! Duplicate groups carry a global 1-based index range assigned at
//! construction, in emission order, so the numbering the user sees is
//! contiguous and can be mapped back to files during deletion.
//!
//! # Example
//!
//! ```
//! use dupescan::duplicates::group_by_size;
//! use dupescan::scanner::FileEntry;
//! use std::path::PathBuf;
//!
//! let files = vec![
//!     FileEntry::new(PathBuf::from("/file1.txt"), 1024),
//!     FileEntry::new(PathBuf::from("/file2.txt"), 1024),
//!     FileEntry::new(PathBuf::from("/file3.txt"), 2048),
//! ];
//!
//! // Only sizes with 2+ files survive as candidate groups
//! let (groups, stats) = group_by_size(files);
//!
//! assert_eq!(stats.total_files, 3);
//! assert_eq!(stats.potential_duplicates, 2);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].size, 1024);
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use log::{debug, trace};

use crate::scanner::{hash_to_hex, FileEntry, Hash, HashError, Hasher};

/// Direction for ordering size groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Largest sizes first
    Descending,
    /// Smallest sizes first
    Ascending,
}

impl SortOrder {
    /// Parse a menu token: `1` selects Descending, `2` Ascending.
    ///
    /// Any other token (including `0`, negatives, and non-numeric text)
    /// is rejected with `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().parse::<u8>() {
            Ok(1) => Some(SortOrder::Descending),
            Ok(2) => Some(SortOrder::Ascending),
            _ => None,
        }
    }
}

/// A group of files sharing the same exact size.
///
/// Only sizes with two or more files become groups; file order within a
/// group is the traversal order of the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeGroup {
    /// File size in bytes (shared by all files in this group)
    pub size: u64,
    /// Files with this exact size, in traversal order
    pub files: Vec<PathBuf>,
}

impl SizeGroup {
    /// Create a size group from its files.
    #[must_use]
    pub fn with_files(size: u64, files: Vec<PathBuf>) -> Self {
        Self { size, files }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Confirmed duplicate group: files of one size sharing one digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Content digest shared by every file in the group
    pub hash: Hash,
    /// File size in bytes
    pub size: u64,
    /// Files with this digest, in traversal order
    pub files: Vec<PathBuf>,
    /// Global 1-based index of the first file in this group
    pub index_start: usize,
}

impl DuplicateGroup {
    /// Create a new duplicate group.
    #[must_use]
    pub fn new(hash: Hash, size: u64, files: Vec<PathBuf>, index_start: usize) -> Self {
        Self {
            hash,
            size,
            files,
            index_start,
        }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Digest as the lowercase hex string shown to the user.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        hash_to_hex(&self.hash)
    }
}

/// Statistics from the size grouping stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Total number of files processed
    pub total_files: usize,
    /// Number of distinct file sizes seen
    pub unique_sizes: usize,
    /// Number of files that could be duplicates (in groups of 2+)
    pub potential_duplicates: usize,
    /// Number of files eliminated as unique (singleton sizes)
    pub eliminated_unique: usize,
}

/// Group files by exact size, keeping only sizes with 2+ files.
///
/// File order within each group is insertion order, i.e. the traversal
/// order of the walk. The order of the groups themselves is unspecified
/// map-enumeration order; callers must apply [`sort_groups`] before any
/// user-facing display.
#[must_use]
pub fn group_by_size(files: impl IntoIterator<Item = FileEntry>) -> (Vec<SizeGroup>, GroupingStats) {
    let mut buckets: HashMap<u64, Vec<PathBuf>> = HashMap::new();
    let mut stats = GroupingStats::default();

    for file in files {
        stats.total_files += 1;
        buckets.entry(file.size).or_default().push(file.path);
    }

    stats.unique_sizes = buckets.len();

    let mut groups = Vec::new();
    for (size, files) in buckets {
        if files.len() > 1 {
            stats.potential_duplicates += files.len();
            groups.push(SizeGroup::with_files(size, files));
        } else {
            stats.eliminated_unique += 1;
            trace!("eliminated unique size {}: {}", size, files[0].display());
        }
    }

    debug!(
        "grouped {} files into {} candidate groups ({} singleton sizes eliminated)",
        stats.total_files,
        groups.len(),
        stats.eliminated_unique
    );

    (groups, stats)
}

/// Sort size groups by size in the given direction.
///
/// The sort is stable, so groups of equal size keep their relative
/// order.
pub fn sort_groups(groups: &mut [SizeGroup], order: SortOrder) {
    match order {
        SortOrder::Descending => groups.sort_by(|a, b| b.size.cmp(&a.size)),
        SortOrder::Ascending => groups.sort_by(|a, b| a.size.cmp(&b.size)),
    }
}

/// Hash every file in the given size groups and form duplicate groups.
///
/// Outer order follows `groups` (already sorted by the caller); inner
/// order is first-seen digest order within each size, materialized as
/// buckets are discovered so map iteration order never leaks into the
/// output. Buckets with fewer than two files are dropped.
///
/// Global 1-based indices are assigned while emitting: each group's
/// `index_start` continues where the previous group's range ended, so
/// indices over all emitted files form a contiguous run `1..=N`.
///
/// The first file that cannot be read aborts the whole pass.
pub fn find_duplicates(
    groups: &[SizeGroup],
    hasher: &Hasher,
) -> Result<Vec<DuplicateGroup>, HashError> {
    let mut duplicates = Vec::new();
    let mut next_index = 1usize;

    for group in groups {
        // Buckets in first-seen order; the map only tracks positions.
        let mut buckets: Vec<(Hash, Vec<PathBuf>)> = Vec::new();
        let mut positions: HashMap<Hash, usize> = HashMap::new();

        for path in &group.files {
            let hash = hasher.hash_file(path)?;
            match positions.get(&hash) {
                Some(&at) => buckets[at].1.push(path.clone()),
                None => {
                    positions.insert(hash, buckets.len());
                    buckets.push((hash, vec![path.clone()]));
                }
            }
        }

        for (hash, files) in buckets {
            if files.len() < 2 {
                continue;
            }
            let index_start = next_index;
            next_index += files.len();
            trace!(
                "duplicate group at {} bytes: {} files, indices start at {}",
                group.size,
                files.len(),
                index_start
            );
            duplicates.push(DuplicateGroup::new(hash, group.size, files, index_start));
        }
    }

    debug!(
        "confirmed {} duplicate groups covering {} files",
        duplicates.len(),
        next_index - 1
    );

    Ok(duplicates)
}

/// Total number of indexed files across all duplicate groups.
#[must_use]
pub fn total_indexed(groups: &[DuplicateGroup]) -> usize {
    groups.iter().map(DuplicateGroup::len).sum()
}
