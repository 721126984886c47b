//! The interactive session driving the pipeline end to end.
//!
//! Walk, group by size, sort, display, confirm, hash, display with
//! global indices, select, delete, report. Data flows strictly forward;
//! every user-driven early exit is a successful run.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use log::{debug, info};

use super::Prompter;
use crate::actions::{delete_files, DeleteReport};
use crate::duplicates::{
    find_duplicates, group_by_size, resolve_selection, sort_groups, total_indexed, DuplicateGroup,
    SizeGroup,
};
use crate::error::ExitCode;
use crate::scanner::{FileEntry, Hasher, Walker};

/// Run the full interactive session against `root`.
///
/// Traversal and hashing errors are fatal and propagate; invalid user
/// input never does (the prompter re-prompts).
pub fn run_session<R: BufRead, W: Write>(
    root: &Path,
    prompter: &mut Prompter<R, W>,
) -> Result<ExitCode> {
    let format = prompter.prompt_line("Enter file format:")?;
    let walker = Walker::new(root).with_extension(&format);
    let files: Vec<FileEntry> = walker.walk().collect::<Result<_, _>>()?;
    info!("discovered {} files under {}", files.len(), root.display());

    let (mut groups, stats) = group_by_size(files);
    debug!(
        "{} of {} files share a size with at least one other",
        stats.potential_duplicates, stats.total_files
    );

    let order = prompter.read_sort_order()?;
    sort_groups(&mut groups, order);
    show_size_groups(prompter.writer(), &groups)?;

    if !prompter.confirm("Check for duplicates?")? {
        return Ok(ExitCode::Success);
    }

    let duplicates = find_duplicates(&groups, &Hasher::new())?;
    if duplicates.is_empty() {
        info!("no duplicate groups found");
        return Ok(ExitCode::Success);
    }
    show_duplicates(prompter.writer(), &duplicates)?;

    if !prompter.confirm("Delete files?")? {
        return Ok(ExitCode::Success);
    }

    let selection = prompter.read_selection(total_indexed(&duplicates))?;
    let mut entries = Vec::with_capacity(selection.len());
    for index in selection {
        entries.push(resolve_selection(&duplicates, index)?);
    }

    let report = delete_files(&entries);
    info!("{}", report.summary());
    show_delete_report(prompter.writer(), &report)?;

    Ok(ExitCode::Success)
}

/// Print each size group: the size header, then one path per line.
fn show_size_groups<W: Write>(out: &mut W, groups: &[SizeGroup]) -> io::Result<()> {
    for group in groups {
        writeln!(out)?;
        writeln!(out, "{} bytes", group.size)?;
        for path in &group.files {
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

/// Print duplicate groups with their digests and global indices.
///
/// The size header is printed only when the size changes between
/// consecutive groups, so all groups of one size share one header.
fn show_duplicates<W: Write>(out: &mut W, groups: &[DuplicateGroup]) -> io::Result<()> {
    let mut last_size = None;
    for group in groups {
        if last_size != Some(group.size) {
            writeln!(out)?;
            writeln!(out, "{} bytes", group.size)?;
            last_size = Some(group.size);
        }
        writeln!(out, "Hash: {}", group.digest_hex())?;
        for (offset, path) in group.files.iter().enumerate() {
            writeln!(out, "{}. {}", group.index_start + offset, path.display())?;
        }
    }
    Ok(())
}

/// Print the deletion outcome: per-file failures, then the freed total.
fn show_delete_report<W: Write>(out: &mut W, report: &DeleteReport) -> io::Result<()> {
    if !report.all_succeeded() {
        writeln!(out)?;
        for (path, _) in &report.failures {
            writeln!(out, "Failed to delete {}", path.display())?;
        }
    }
    writeln!(out)?;
    writeln!(out, "Total freed up space: {} bytes", report.bytes_freed)?;
    Ok(())
}
