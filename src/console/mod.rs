//! Interactive console module.
//!
//! This module provides the user-facing dialogue:
//! - [`prompt`]: re-prompt loops over a generic reader/writer pair
//! - [`session`]: the end-to-end interactive pipeline

pub mod prompt;
pub mod session;

// Re-export main types
pub use prompt::Prompter;
pub use session::run_session;
