//! The author → title → location → quotes tree.
//!
//! Every level is an ordered map, so serialization emits keys in lexicographic
//! order without a separate sort. Quotes sharing a location keep the order they
//! were inserted in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::{Clipping, Error, QuoteEntry, Result, TreeStats};

/// Location key → quotes recorded at that location.
pub type Locations = BTreeMap<String, Vec<QuoteEntry>>;
/// Title → locations.
pub type Titles = BTreeMap<String, Locations>;

/// What [`ClippingsTree::insert`] had to create to store a clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// First clipping by this author.
    NewAuthor,
    /// Known author, first clipping from this title.
    NewTitle,
    /// Known title, first clipping at this location.
    NewLocation,
    /// Location already held quotes; appended after them.
    Appended,
}

/// Hierarchical mapping of every quote in an export.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClippingsTree {
    authors: BTreeMap<String, Titles>,
}

impl ClippingsTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store one clipping. Existing quotes are never replaced.
    pub fn insert(&mut self, clipping: Clipping) -> Insertion {
        let (author, title, location_key, entry) = clipping.into_entry();

        let mut created = None;
        let titles = upsert(&mut self.authors, author, Insertion::NewAuthor, &mut created);
        let locations = upsert(titles, title, Insertion::NewTitle, &mut created);
        let entries = upsert(locations, location_key, Insertion::NewLocation, &mut created);
        entries.push(entry);

        created.unwrap_or(Insertion::Appended)
    }

    /// Insert every clipping in order.
    pub fn extend<I: IntoIterator<Item = Clipping>>(&mut self, clippings: I) {
        for clipping in clippings {
            self.insert(clipping);
        }
    }

    /// Whether the tree holds no quotes at all.
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Borrow the author level.
    pub const fn authors(&self) -> &BTreeMap<String, Titles> {
        &self.authors
    }

    /// Locations recorded for one title.
    pub fn locations(&self, author: &str, title: &str) -> Option<&Locations> {
        self.authors.get(author)?.get(title)
    }

    /// Quotes recorded at one location.
    pub fn quotes(&self, author: &str, title: &str, location_key: &str) -> Option<&[QuoteEntry]> {
        self.locations(author, title)?
            .get(location_key)
            .map(Vec::as_slice)
    }

    pub(crate) fn titles_mut(&mut self) -> impl Iterator<Item = &mut Locations> {
        self.authors.values_mut().flat_map(BTreeMap::values_mut)
    }

    /// Detach a title, dropping its author if nothing else is left under it.
    pub(crate) fn remove_title(&mut self, author: &str, title: &str) -> Option<Locations> {
        let titles = self.authors.get_mut(author)?;
        let locations = titles.remove(title)?;
        if titles.is_empty() {
            self.authors.remove(author);
        }
        Some(locations)
    }

    /// Merge a detached title's locations under `author`/`title`.
    ///
    /// Quotes landing on an occupied location go after the ones already there.
    pub(crate) fn graft_title(&mut self, author: String, title: String, moved: Locations) {
        let locations = self
            .authors
            .entry(author)
            .or_default()
            .entry(title)
            .or_default();
        for (key, entries) in moved {
            locations.entry(key).or_default().extend(entries);
        }
    }

    /// Count authors, titles, locations and quotes.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            authors: self.authors.len(),
            ..TreeStats::default()
        };
        for titles in self.authors.values() {
            stats.titles += titles.len();
            for locations in titles.values() {
                stats.locations += locations.len();
                stats.quotes += locations.values().map(Vec::len).sum::<usize>();
            }
        }
        stats
    }

    /// Render as indented JSON with a trailing newline.
    ///
    /// Non-ASCII text is written as-is rather than `\u` escaped.
    pub fn to_json(&self, indent: usize) -> Result<String> {
        let indent = " ".repeat(indent);
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buf,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        self.serialize(&mut serializer)?;

        let mut json = String::from_utf8(buf).map_err(|e| Error::Serialization(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }
}

fn upsert<'m, V: Default>(
    map: &'m mut BTreeMap<String, V>,
    key: String,
    level: Insertion,
    created: &mut Option<Insertion>,
) -> &'m mut V {
    map.entry(key).or_insert_with(|| {
        created.get_or_insert(level);
        V::default()
    })
}
