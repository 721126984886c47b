//! Interactive prompts over a generic reader/writer pair.
//!
//! # Overview
//!
//! [`Prompter`] wraps a buffered reader and a writer and owns every
//! re-prompt loop of the interactive session. It is generic so tests
//! can drive a full session from a [`std::io::Cursor`] script and
//! capture the transcript in a `Vec<u8>`; the binary passes locked
//! stdin/stdout.
//!
//! Every prompt is preceded by one blank line. Invalid menu or yes/no
//! answers print `Wrong option`; invalid selection lists print
//! `Wrong format`. The loops have no retry bound: they end only on
//! valid input, or on a read error (end of input included), which is
//! fatal for the run.

use std::io::{self, BufRead, Write};

use crate::duplicates::{parse_selection, SortOrder};

/// Line-oriented prompt handler for the interactive session.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Access the underlying writer, for rendering non-prompt output.
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    /// Read one line of input with the terminator stripped.
    ///
    /// Exhausted input is an error: the session cannot continue without
    /// an answer, and looping on a closed stream would spin forever.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended while awaiting an answer",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Print a prompt and read the answer line.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output)?;
        writeln!(self.output, "{prompt}")?;
        self.read_line()
    }

    /// Ask a yes/no question until it is answered.
    ///
    /// Only the exact answers `yes` and `no` are accepted; anything
    /// else prints `Wrong option` and asks again.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            let answer = self.prompt_line(prompt)?;
            match answer.as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => {
                    writeln!(self.output)?;
                    writeln!(self.output, "Wrong option")?;
                }
            }
        }
    }

    /// Present the size sorting menu and read a direction.
    ///
    /// The menu is printed once; invalid answers re-prompt with
    /// `Enter a sorting option:` until `1` or `2` is entered.
    pub fn read_sort_order(&mut self) -> io::Result<SortOrder> {
        writeln!(self.output)?;
        writeln!(self.output, "Size sorting options:")?;
        writeln!(self.output, "1. Descending")?;
        writeln!(self.output, "2. Ascending")?;

        loop {
            let answer = self.read_line()?;
            if let Some(order) = SortOrder::from_token(&answer) {
                return Ok(order);
            }
            writeln!(self.output)?;
            writeln!(self.output, "Wrong option")?;
            writeln!(self.output)?;
            writeln!(self.output, "Enter a sorting option:")?;
        }
    }

    /// Read a deletion selection validated against `total`.
    ///
    /// Any line containing a non-integer or out-of-range token is
    /// rejected wholesale with `Wrong format`. An empty line is an
    /// empty selection.
    pub fn read_selection(&mut self, total: usize) -> io::Result<Vec<usize>> {
        loop {
            let line = self.prompt_line("Enter file numbers to delete:")?;
            if let Some(selection) = parse_selection(&line, total) {
                return Ok(selection);
            }
            writeln!(self.output)?;
            writeln!(self.output, "Wrong format")?;
        }
    }
}
