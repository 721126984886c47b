//! Process exit codes.

/// Exit codes for the dupescan application.
///
/// - 0: Success (session completed or was declined at a confirmation)
/// - 1: General error (unexpected failure)
///
/// A missing directory argument is reported on stdout but still exits
/// with `Success`, matching the tool's lenient invocation contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success: the session ran to completion or ended at a prompt.
    Success = 0,
    /// General error: an unexpected error occurred.
    GeneralError = 1,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
