//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Size-based file grouping and sorting
//! - Content-hash grouping with global index assignment
//! - Mapping user-selected indices back to files

pub mod groups;
pub mod selector;

// Re-export main types
pub use groups::{
    find_duplicates, group_by_size, sort_groups, total_indexed, DuplicateGroup, GroupingStats,
    SizeGroup, SortOrder,
};
pub use selector::{parse_selection, resolve_selection, SelectionError};
