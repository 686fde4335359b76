//! clippings CLI - convert an e-reader clippings export to JSON
//!
//! This is the library side of the `clippings` binary. Argument parsing,
//! logging setup and command dispatch live here so `main` only has to map
//! the outcome to an exit code.

use anyhow::Result;
use clap::Parser;
use clippings_core::Config;

mod cli;
mod commands;
pub mod error;
mod utils;

use cli::{Cli, Commands};
use error::CliError;
use utils::initialize_logging;

/// Execute the clippings CLI with the current process arguments.
///
/// # Errors
///
/// Returns an error if logging cannot be initialized, the configuration is
/// invalid, or the conversion fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    if let Some(Commands::Completions { shell }) = &cli.command {
        commands::generate(*shell);
        return Ok(());
    }

    if let Some(args) = cli.convert_args() {
        let config = load_config(&cli)?;
        commands::convert(args, &config, cli.quiet)?;
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    Ok(Config::load(cli.config.as_deref()).map_err(CliError::from)?)
}
