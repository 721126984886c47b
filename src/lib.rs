//! dupescan - Interactive Duplicate File Finder
//!
//! A Rust CLI application that walks a directory tree, groups files by
//! size, confirms duplicates by content hashing (BLAKE3), and deletes
//! the copies the user selects in an interactive console session.

pub mod actions;
pub mod cli;
pub mod console;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod scanner;

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::Cli;
use crate::console::Prompter;
use crate::error::ExitCode;

/// Run the application with parsed CLI arguments.
///
/// Locks stdin and stdout for the interactive session and forwards to
/// [`run_with`].
///
/// # Errors
///
/// Propagates any error from [`run_with`].
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    run_with(cli.directory.as_deref(), &mut prompter)
}

/// Run against an explicit prompter; callers inject the reader and
/// writer.
///
/// A missing directory prints a short notice and counts as success;
/// otherwise the full interactive [`console`] session runs over
/// `directory`.
///
/// # Errors
///
/// Returns an error when the scan, hashing, or console I/O fails in a
/// way the session cannot recover from.
pub fn run_with<R: BufRead, W: Write>(
    directory: Option<&Path>,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<ExitCode> {
    let Some(root) = directory else {
        writeln!(prompter.writer(), "Directory is not specified")?;
        return Ok(ExitCode::Success);
    };

    console::run_session(root, prompter)
}
