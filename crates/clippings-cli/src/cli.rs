//! # CLI Structure and Argument Parsing
//!
//! ```bash
//! # Convert with configured defaults (in/My Clippings.txt → out/clippings.json)
//! clippings
//!
//! # Explicit paths; `-` writes the JSON to stdout
//! clippings "My Clippings.txt" clippings.json
//! clippings "My Clippings.txt" -
//!
//! # Merge author aliases while converting
//! clippings "My Clippings.txt" out.json --substitute renames.json
//!
//! # Shell completions
//! clippings completions fish > ~/.config/fish/completions/clippings.fish
//! ```
//!
//! Running without a subcommand is the same as `clippings convert`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Main CLI structure for the `clippings` command
#[derive(Parser, Clone, Debug)]
#[command(name = "clippings")]
#[command(version)]
#[command(about = "Convert an e-reader clippings export into hierarchical JSON", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Conversion arguments used when no subcommand is given
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Show debug logging
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Path to configuration file (overrides autodiscovery). Also via `CLIPPINGS_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "CLIPPINGS_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Conversion arguments in effect, if the invocation converts at all.
    pub const fn convert_args(&self) -> Option<&ConvertArgs> {
        match &self.command {
            Some(Commands::Convert(args)) => Some(args),
            Some(Commands::Completions { .. }) => None,
            None => Some(&self.convert),
        }
    }
}

/// Available subcommands for the `clippings` CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Convert a clippings export to JSON (default)
    Convert(ConvertArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for a conversion run
#[derive(Args, Clone, Debug, Default)]
pub struct ConvertArgs {
    /// Clippings export to read [default: config `paths.input`]
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// JSON file to write, or `-` for stdout [default: config `paths.output`]
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// JSON list of author/title renames to apply
    #[arg(short = 's', long, value_name = "FILE")]
    pub substitute: Option<PathBuf>,

    /// Author recorded for clippings whose header has none
    #[arg(long, value_name = "NAME")]
    pub sentinel_author: Option<String>,

    /// Spaces per JSON indentation level
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,
}

impl ConvertArgs {
    /// Whether the JSON document goes to stdout.
    pub fn writes_stdout(&self) -> bool {
        self.output.as_deref().is_some_and(|p| p.as_os_str() == "-")
    }
}
