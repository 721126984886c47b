//! dupescan - Interactive Duplicate File Finder
//!
//! Entry point for the dupescan CLI application.

use clap::Parser;
use dupescan::cli::Cli;
use dupescan::error::ExitCode;
use dupescan::logging;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet);

    // Run the application logic
    match dupescan::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
