//! Command-line interface definitions.
//!
//! The program takes a single positional directory argument; everything
//! else is decided interactively during the session. The logging flags
//! adjust stderr verbosity only and never change the stdout dialogue.
//!
//! # Example
//!
//! ```bash
//! # Scan a directory interactively
//! dupescan ~/Downloads
//!
//! # Verbose mode for debugging
//! dupescan -vv ~/Downloads
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Interactive duplicate file finder.
///
/// Walks the given directory, groups files by size, confirms duplicates
/// by content hash, and interactively deletes the copies you select.
#[derive(Debug, Parser)]
#[command(name = "dupescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for duplicate files
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
