//! Author/title renames applied to a merged tree.
//!
//! Devices record whatever the book metadata says, so the same book can show
//! up under `Le Guin, Ursula K.` and `Ursula K. Le Guin`. A substitution list
//! moves a title subtree to a new author/title, merging with anything already
//! there.
//!
//! ```json
//! [
//!   {
//!     "from": { "author": "Le Guin, Ursula K.", "title": "Tales from Earthsea" },
//!     "to":   { "author": "Ursula K. Le Guin",  "title": "Tales from Earthsea" }
//!   }
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{ClippingsTree, Error, Result};

/// An author/title pair addressing one title subtree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookRef {
    /// Author key in the tree.
    pub author: String,
    /// Title key under that author.
    pub title: String,
}

impl BookRef {
    /// Convenience constructor.
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
        }
    }
}

/// Move the `from` title to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// Title to move.
    pub from: BookRef,
    /// Destination, created if absent.
    pub to: BookRef,
}

/// Outcome of applying a substitution list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubstitutionReport {
    /// Rules that moved a subtree.
    pub applied: usize,
    /// Rules whose `from` title was not in the tree.
    pub missing: Vec<BookRef>,
}

/// Parse a substitution list from JSON text.
pub fn parse_substitutions(json: &str) -> Result<Vec<Substitution>> {
    serde_json::from_str(json).map_err(|e| Error::Substitution(e.to_string()))
}

/// Read and parse a substitution list file.
pub fn load_substitutions(path: &Path) -> Result<Vec<Substitution>> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Substitution(format!("Failed to read {}: {e}", path.display()))
    })?;
    parse_substitutions(&content)
}

impl ClippingsTree {
    /// Apply renames in order. Emptied authors are removed.
    pub fn substitute(&mut self, substitutions: &[Substitution]) -> SubstitutionReport {
        let mut report = SubstitutionReport::default();

        for rule in substitutions {
            if rule.from == rule.to {
                if self.locations(&rule.from.author, &rule.from.title).is_some() {
                    report.applied += 1;
                } else {
                    report.missing.push(rule.from.clone());
                }
                continue;
            }

            let Some(moved) = self.remove_title(&rule.from.author, &rule.from.title) else {
                warn!(
                    author = %rule.from.author,
                    title = %rule.from.title,
                    "substitution source not found; skipping"
                );
                report.missing.push(rule.from.clone());
                continue;
            };

            debug!(
                from_author = %rule.from.author,
                from_title = %rule.from.title,
                to_author = %rule.to.author,
                to_title = %rule.to.title,
                locations = moved.len(),
                "substituting title"
            );
            self.graft_title(rule.to.author.clone(), rule.to.title.clone(), moved);
            report.applied += 1;
        }

        report
    }
}
