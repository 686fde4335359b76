//! Logging initialization and configuration.
//!
//! Sets up the tracing subscriber on stderr and color control based on CLI
//! flags and environment variables.

use anyhow::Result;
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;

/// Pick the log level for this invocation.
///
/// Informational logs are dropped when the JSON goes to stdout so piping the
/// output stays clean unless `--verbose` asks for more.
pub fn log_level(cli: &Cli) -> Level {
    if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else if cli.convert_args().is_some_and(crate::cli::ConvertArgs::writes_stdout) {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// Initialize the logging subsystem based on CLI flags.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let env_no_color = std::env::var_os("NO_COLOR").is_some();
    if cli.no_color || env_no_color {
        color_control::set_override(false);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    fn level_for(args: &[&str]) -> Level {
        let mut argv = vec!["clippings"];
        argv.extend_from_slice(args);
        log_level(&Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(level_for(&[]), Level::INFO);
        assert_eq!(level_for(&["in.txt", "out.json"]), Level::INFO);
    }

    #[test]
    fn test_stdout_output_quiets_info() {
        assert_eq!(level_for(&["in.txt", "-"]), Level::WARN);
        assert_eq!(level_for(&["convert", "in.txt", "-"]), Level::WARN);
    }

    #[test]
    fn test_flags_override() {
        assert_eq!(level_for(&["-v", "in.txt", "-"]), Level::DEBUG);
        assert_eq!(level_for(&["--quiet"]), Level::ERROR);
    }
}
