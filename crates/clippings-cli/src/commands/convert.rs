//! Convert command implementation

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clippings_core::{Config, ConvertOptions, Converter, load_substitutions};
use colored::Colorize;
use tracing::{debug, info};

use crate::cli::ConvertArgs;
use crate::error::{CliError, ErrorCategory};
use crate::utils::ConversionProgress;

const STDOUT_PATH: &str = "-";

/// Convert the export at the resolved input path and write its JSON.
///
/// Nothing is written unless the whole export converts.
///
/// # Errors
///
/// Returns a [`CliError`] carrying the exit category when the input is
/// missing or malformed, the substitution file is invalid, or the output
/// cannot be written.
pub fn execute(args: &ConvertArgs, config: &Config, quiet: bool) -> Result<()> {
    let (input, output) = resolve_paths(args, config);
    let options = resolve_options(args, config)?;
    let indent = options.config.indent;

    info!("Extracting clippings from {}", input.display());
    let raw = read_input(&input)?;

    let progress = ConversionProgress::new(!quiet);
    let result = Converter::new(options)
        .convert_with_progress(&raw, |done, total| progress.update(done, total));
    progress.finish();
    let conversion = result.map_err(CliError::from)?;

    if conversion.skipped > 0 {
        debug!(
            skipped = conversion.skipped,
            "dropped blocks that are not highlights"
        );
    }

    let json = conversion.tree.to_json(indent).map_err(CliError::from)?;
    write_output(&output, &json)?;

    if !quiet {
        let stats = conversion.tree.stats();
        let target = if is_stdout(&output) {
            "stdout".to_string()
        } else {
            output.display().to_string()
        };
        eprintln!(
            "{} Wrote {} quotes from {} titles by {} authors to {}",
            "✓".green(),
            stats.quotes,
            stats.titles,
            stats.authors,
            target.bold()
        );
    }

    Ok(())
}

/// Input and output paths, falling back to the configured defaults.
fn resolve_paths(args: &ConvertArgs, config: &Config) -> (PathBuf, PathBuf) {
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| config.paths.input.clone());
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.paths.output.clone());
    (input, output)
}

/// Converter options with CLI flags taking precedence over the config file.
fn resolve_options(args: &ConvertArgs, config: &Config) -> Result<ConvertOptions> {
    let mut options = ConvertOptions {
        config: config.convert.clone(),
        substitutions: Vec::new(),
    };
    if let Some(author) = &args.sentinel_author {
        options.config.sentinel_author.clone_from(author);
    }
    if let Some(indent) = args.indent {
        options.config.indent = indent;
    }
    if let Some(path) = &args.substitute {
        options.substitutions = load_substitutions(path).map_err(CliError::from)?;
        debug!(
            count = options.substitutions.len(),
            path = %path.display(),
            "loaded substitutions"
        );
    }
    Ok(options)
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| read_error(path, e).into())
}

fn read_error(path: &Path, err: io::Error) -> CliError {
    let display = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => CliError::not_found(anyhow!("Input file not found: {display}")),
        io::ErrorKind::InvalidData => CliError::new(
            ErrorCategory::InvalidInput,
            anyhow::Error::new(err).context(format!("{display} is not valid UTF-8")),
        ),
        _ => CliError::io(anyhow::Error::new(err).context(format!("Failed to read {display}"))),
    }
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == STDOUT_PATH
}

fn write_output(path: &Path, json: &str) -> Result<()> {
    if is_stdout(path) {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(json.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write to stdout")
            .map_err(CliError::io)?;
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))
            .map_err(CliError::io)?;
    }
    fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))
        .map_err(CliError::io)?;
    debug!(path = %path.display(), bytes = json.len(), "wrote output");
    Ok(())
}
