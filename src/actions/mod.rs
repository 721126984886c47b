//! File actions module.
//!
//! This module provides the deletion pass of the pipeline: permanent
//! removal of user-selected duplicates with per-file failure tracking.

pub mod delete;

// Re-export commonly used types
pub use delete::{delete_files, DeleteError, DeleteReport};
