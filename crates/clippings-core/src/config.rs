//! Configuration for clippings conversions.
//!
//! Settings are stored as TOML. Lookup order:
//!
//! 1. An explicit path (the CLI's `--config`, or `CLIPPINGS_CONFIG`)
//! 2. The platform config directory (`~/.config/clippings/config.toml` on Linux)
//! 3. Built-in defaults
//!
//! Every field is optional in the file; missing fields fall back to defaults.
//!
//! ```toml
//! [paths]
//! input = "in/My Clippings.txt"
//! output = "out/clippings.json"
//!
//! [convert]
//! sentinel_author = "ZZNOAUTHOR"
//! indent = 4
//! ```
//!
//! ```rust
//! use clippings_core::Config;
//!
//! let config: Config = toml::from_str("[convert]\nindent = 2\n")?;
//! assert_eq!(config.convert.indent, 2);
//! assert_eq!(config.convert.sentinel_author, "ZZNOAUTHOR");
//! # Ok::<(), toml::de::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::DEFAULT_SENTINEL_AUTHOR;
use crate::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default input and output locations
    pub paths: PathsConfig,
    /// Conversion behaviour
    pub convert: ConvertConfig,
}

/// Where the export is read from and the JSON document written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Clippings export used when no input path is given.
    pub input: PathBuf,
    /// JSON document written when no output path is given.
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("in/My Clippings.txt"),
            output: PathBuf::from("out/clippings.json"),
        }
    }
}

/// Knobs for the conversion itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Author assigned to title-only clippings.
    pub sentinel_author: String,
    /// Spaces per JSON indentation level.
    pub indent: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            sentinel_author: DEFAULT_SENTINEL_AUTHOR.to_string(),
            indent: 4,
        }
    }
}

impl Config {
    /// Load configuration, preferring `explicit`, then the platform config
    /// file, then defaults.
    ///
    /// An explicit path that does not exist is an error; a missing platform
    /// file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no config file found; using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Parse a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Platform config file location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "clippings", "clippings")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
