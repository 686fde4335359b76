//! `clippings` binary: runs the CLI and maps failures to exit codes.

use std::process::ExitCode;

use clippings_cli::error::exit_code_from_error;
use colored::Colorize;

fn main() -> ExitCode {
    match clippings_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(exit_code_from_error(&err))
        },
    }
}
