//! Pattern-based extraction of clipping blocks from an export.
//!
//! An export is a flat log of blocks shaped like:
//!
//! ```text
//! Pride and Prejudice (Jane Austen)
//! - Highlight Loc. 150 | Added on Monday, March 4, 2019 9:15 AM
//!
//! It is a truth universally acknowledged
//! ==========
//! ```
//!
//! Every block is matched by one grammar and then classified exactly once by
//! its header line: a trailing ` (Author)` segment puts it in the with-author
//! sequence, anything else in the without-author sequence. Blocks that do not
//! match (bookmarks, notes, truncated entries) are dropped without error.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::{Byline, ExtractionStats, RawClipping};

/// Regex for one highlight block.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?m)^(?P<header>[^\n]+)\n+",
        r"- Highlight (?P<marker>Loc\.|on Page) (?P<location>[0-9]+)",
        r"(?: +|-(?P<range_end>[0-9]+) +)\| Added on ",
        r"(?P<weekday>[a-zA-Z]+), (?P<month>[a-zA-Z]+) (?P<day>[0-9]+), (?P<year>[0-9]+),? ",
        r"(?P<hour>[0-9]+):(?P<minute>[0-9]+) (?P<meridiem>AM|PM)[ \t]*\n+",
        r"(?:(?P<quote>[^\n]*)\n+)?",
        r"=+",
    ))
    .unwrap()
});

/// Regex splitting a `Title (Author)` header. The last parenthesized segment wins.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static AUTHOR_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<title>.+) \((?P<author>.+)\)$").unwrap());

/// Regex for separator lines, used only to count dropped blocks.
///
/// SAFETY: Pattern is a compile-time constant that is known to be valid.
#[allow(clippy::unwrap_used)]
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^=+[ \t]*$").unwrap());

const BOM: char = '\u{feff}';

/// Clippings found in one export, split by header flavour.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction<'a> {
    /// Blocks whose header names an author, in text order.
    pub with_author: Vec<RawClipping<'a>>,
    /// Title-only blocks, in text order.
    pub without_author: Vec<RawClipping<'a>>,
    /// Separator-delimited blocks that matched neither flavour.
    pub skipped: usize,
}

impl<'a> Extraction<'a> {
    /// Number of extracted clippings.
    pub fn len(&self) -> usize {
        self.with_author.len() + self.without_author.len()
    }

    /// Whether nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-flavour counts.
    pub fn stats(&self) -> ExtractionStats {
        ExtractionStats {
            with_author: self.with_author.len(),
            without_author: self.without_author.len(),
        }
    }

    /// All clippings in merge order: with-author blocks first, then title-only
    /// blocks, each in the order they appear in the text.
    pub fn into_ordered(self) -> impl Iterator<Item = RawClipping<'a>> {
        self.with_author.into_iter().chain(self.without_author)
    }
}

/// Strip a leading byte-order mark and normalize CRLF line endings.
pub fn preprocess(raw: &str) -> Cow<'_, str> {
    let text = raw.strip_prefix(BOM).unwrap_or(raw);
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Extract every highlight block from preprocessed text.
pub fn extract(text: &str) -> Extraction<'_> {
    let mut extraction = Extraction::default();

    for caps in BLOCK_RE.captures_iter(text) {
        let Some(raw) = raw_clipping(&caps) else {
            continue;
        };
        match raw.byline {
            Byline::Author(_) => extraction.with_author.push(raw),
            Byline::Anonymous => extraction.without_author.push(raw),
        }
    }

    let blocks = SEPARATOR_RE.find_iter(text).count();
    extraction.skipped = blocks.saturating_sub(extraction.len());
    debug!(
        with_author = extraction.with_author.len(),
        without_author = extraction.without_author.len(),
        skipped = extraction.skipped,
        "extracted clippings"
    );

    extraction
}

fn raw_clipping<'a>(caps: &Captures<'a>) -> Option<RawClipping<'a>> {
    let field = |name: &str| caps.name(name).map(|m| m.as_str());

    let header = field("header")?.trim_start_matches(BOM);
    let (title, byline) = split_header(header);

    Some(RawClipping {
        title,
        byline,
        location_marker: field("marker")?,
        location: field("location")?,
        range_end: field("range_end"),
        weekday: field("weekday")?,
        month: field("month")?,
        day: field("day")?,
        year: field("year")?,
        hour: field("hour")?,
        minute: field("minute")?,
        meridiem: field("meridiem")?,
        quote: field("quote").unwrap_or_default(),
    })
}

fn split_header(header: &str) -> (&str, Byline<'_>) {
    match AUTHOR_HEADER_RE.captures(header) {
        Some(caps) => match (caps.name("title"), caps.name("author")) {
            (Some(title), Some(author)) => (title.as_str(), Byline::Author(author.as_str())),
            _ => (header, Byline::Anonymous),
        },
        None => (header, Byline::Anonymous),
    }
}
