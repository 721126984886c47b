//! Logging infrastructure.
//!
//! Wires the `log` facade to an `env_logger` backend writing to stderr,
//! keeping stdout reserved for the interactive dialogue. The effective
//! level comes from `RUST_LOG` when set, else from the `--quiet` and
//! `--verbose` flags, else defaults to warn so an unadorned run shows
//! nothing but the dialogue.
//!
//! # Example
//!
//! ```rust,no_run
//! use dupescan::logging::init_logging;
//!
//! // Default (warn) level
//! init_logging(0, false);
//! ```

use env_logger::Builder;
use log::LevelFilter;
use std::env;
use std::io::Write;

/// Install the global logger from the CLI verbosity flags.
///
/// Call this once from `main` before the first log macro fires.
/// `RUST_LOG` overrides the flags when set; otherwise `quiet` caps the
/// level at errors and each `-v` raises it one step (info, debug,
/// trace) from the warn default.
///
/// # Panics
///
/// Panics when called a second time; a process gets exactly one
/// `env_logger` installation.
pub fn init_logging(verbose: u8, quiet: bool) {
    // RUST_LOG takes precedence over CLI flags when set
    let use_env = env::var("RUST_LOG").is_ok();

    let mut builder = Builder::new();

    if use_env {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }

    configure_format(&mut builder);

    builder.init();

    log::debug!("Logging initialized at level: {:?}", log::max_level());
}

/// Map the CLI flags to a level filter.
///
/// `quiet` wins over any `verbose` count. Without flags the level is
/// `Warn`: scan statistics live at info and below, so stdout carries
/// nothing but the prompts and listings.
fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Configure the log line format.
///
/// Debug builds carry a timestamp and the module path; release builds
/// print just the colored level and the message.
fn configure_format(builder: &mut Builder) {
    #[cfg(debug_assertions)]
    builder.format(|buf, record| {
        let level = record.level();
        let level_style = buf.default_level_style(level);
        writeln!(
            buf,
            "{} {level_style}{:<5}{level_style:#} [{}] {}",
            buf.timestamp_seconds(),
            level,
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    #[cfg(not(debug_assertions))]
    builder.format(|buf, record| {
        let level = record.level();
        let level_style = buf.default_level_style(level);
        writeln!(
            buf,
            "{level_style}{:<5}{level_style:#} {}",
            level,
            record.args()
        )
    });
}
