//! # clippings-core
//!
//! Converts an e-reader "My Clippings" export into a hierarchical JSON
//! document keyed by author → title → location.
//!
//! ## Architecture
//!
//! - **Extraction**: one block grammar, each match classified once as
//!   with-author or title-only ([`extract`])
//! - **Normalization**: captured fields → [`Clipping`] with a sortable
//!   timestamp and a prefixed location key ([`normalize`])
//! - **Merging**: an ordered-map tree that only ever appends ([`ClippingsTree`])
//! - **Padding**: per-title zero padding so string order matches numeric order
//!   ([`pad`])
//! - **Substitution**: optional author/title renames ([`substitute`])
//!
//! ## Quick Start
//!
//! ```rust
//! use clippings_core::{ConvertOptions, Converter};
//!
//! let export = "\u{feff}Pride and Prejudice (Jane Austen)\n\
//!     - Highlight Loc. 150 | Added on Monday, March 4, 2019 9:15 AM\n\
//!     \n\
//!     It is a truth universally acknowledged\n\
//!     ==========\n";
//!
//! let conversion = Converter::new(ConvertOptions::default()).convert(export)?;
//! let quotes = conversion
//!     .tree
//!     .quotes("Jane Austen", "Pride and Prejudice", "l150")
//!     .unwrap_or_default();
//! assert_eq!(quotes[0].date, "20190304-0915");
//! println!("{}", conversion.tree.to_json(4)?);
//! # Ok::<(), clippings_core::Error>(())
//! ```

/// Configuration file handling
pub mod config;
/// Error types and result aliases
pub mod error;
/// Block extraction from raw export text
pub mod extract;
/// Field normalization into canonical clippings
pub mod normalize;
/// Location key padding
pub mod pad;
/// Pipeline entry point
pub mod pipeline;
/// Author/title substitution
pub mod substitute;
/// The hierarchical quote tree
pub mod tree;
/// Core data types
pub mod types;

pub use config::{Config, ConvertConfig, PathsConfig};
pub use error::{Error, Result};
pub use extract::{Extraction, extract, preprocess};
pub use normalize::normalize;
pub use pipeline::{Conversion, ConvertOptions, Converter};
pub use substitute::{
    BookRef, Substitution, SubstitutionReport, load_substitutions, parse_substitutions,
};
pub use tree::{ClippingsTree, Insertion, Locations, Titles};
pub use types::*;
