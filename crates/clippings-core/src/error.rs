//! Error types and handling for clippings-core operations.
//!
//! The conversion pipeline is a deterministic function of its input buffer.
//! The CLI maps each variant onto a stable exit code.
//!
//! ## Error Categories
//!
//! - **Format Errors**: a matched clipping carries a field that cannot be
//!   converted (unknown month, non-numeric day, impossible date)
//! - **Configuration Errors**: unreadable or malformed config files
//! - **Substitution Errors**: unreadable or malformed rename lists
//! - **Serialization Errors**: JSON encoding failures
//!
//! Blocks that do not match the clipping grammar at all are *not* errors; they
//! are dropped by the extractor.
//!
//! ```rust
//! use clippings_core::{Converter, ConvertOptions, Error};
//!
//! let text = "Book (Author)\n- Highlight Loc. 1 | Added on Monday, Smarch 4, 2019 9:15 AM\n\nq\n==========";
//! match Converter::new(ConvertOptions::default()).convert(text) {
//!     Err(Error::Format { field, value }) => eprintln!("bad {field}: {value}"),
//!     Err(e) => eprintln!("conversion failed: {e}"),
//!     Ok(conversion) => println!("{} quotes", conversion.tree.stats().quotes),
//! }
//! ```

use thiserror::Error;

/// The main error type for clippings-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A matched clipping contains a field that cannot be converted.
    ///
    /// This aborts the whole conversion.
    #[error("Format error: invalid {field} '{value}'")]
    Format {
        /// Name of the offending field (`month`, `day`, `timestamp`, ...).
        field: &'static str,
        /// The raw captured text.
        value: String,
    },

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A substitution (rename) list could not be read or parsed.
    #[error("Substitution error: {0}")]
    Substitution(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Build a [`Error::Format`] for a captured field.
    pub fn format(field: &'static str, value: impl Into<String>) -> Self {
        Self::Format {
            field,
            value: value.into(),
        }
    }
}

/// Convenience type alias for Results with our Error type.
pub type Result<T> = std::result::Result<T, Error>;
