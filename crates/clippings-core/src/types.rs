use serde::{Deserialize, Serialize};

/// Author value assigned to clippings whose header carries no author.
pub const DEFAULT_SENTINEL_AUTHOR: &str = "ZZNOAUTHOR";

/// Who a header line attributes the book to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Byline<'a> {
    /// `Title (Author)` header.
    Author(&'a str),
    /// Title-only header; the sentinel author is used downstream.
    Anonymous,
}

/// Granularity of a clipping position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    /// `Loc. N` - a device location index.
    Location,
    /// `on Page N` - a printed page number.
    Page,
    /// Anything else the grammar let through.
    Unknown,
}

impl LocationKind {
    /// Classify the captured location marker.
    pub fn from_marker(marker: &str) -> Self {
        match marker {
            "Loc." => Self::Location,
            "on Page" => Self::Page,
            _ => Self::Unknown,
        }
    }

    /// One-letter key prefix (`l`, `p`, or empty).
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Location => "l",
            Self::Page => "p",
            Self::Unknown => "",
        }
    }
}

/// Fields captured from one clipping block, borrowed from the export text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawClipping<'a> {
    /// Header text without the author segment.
    pub title: &'a str,
    /// Author segment of the header, if any.
    pub byline: Byline<'a>,
    /// `Loc.` or `on Page`
    pub location_marker: &'a str,
    /// First number of the location or page.
    pub location: &'a str,
    /// End of a `163-165` style range. Kept for provenance only.
    pub range_end: Option<&'a str>,
    /// Day name, e.g. `Sunday`.
    pub weekday: &'a str,
    /// Month name as written; only the first three letters matter.
    pub month: &'a str,
    /// Day of month.
    pub day: &'a str,
    /// Four-digit year.
    pub year: &'a str,
    /// Hour on the 12-hour clock.
    pub hour: &'a str,
    /// Minute of the hour.
    pub minute: &'a str,
    /// `AM` or `PM`
    pub meridiem: &'a str,
    /// Highlighted text; empty for a blank highlight.
    pub quote: &'a str,
}

/// A clipping after normalization, ready to be merged into the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipping {
    /// Author, or the sentinel for title-only headers.
    pub author: String,
    /// Book title.
    pub title: String,
    /// Kind prefix followed by the location number, e.g. `l1321` or `p42`.
    pub location_key: String,
    /// `YYYYMMDD-HHMM`
    pub timestamp: String,
    /// Highlighted text.
    pub quote: String,
}

impl Clipping {
    /// Split off the quote entry stored at this clipping's location.
    pub fn into_entry(self) -> (String, String, String, QuoteEntry) {
        (
            self.author,
            self.title,
            self.location_key,
            QuoteEntry {
                date: self.timestamp,
                quote: self.quote,
            },
        )
    }
}

/// One highlighted passage at a location.
///
/// Field order is the serialized member order: `date` sorts before `quote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEntry {
    /// `YYYYMMDD-HHMM` time the highlight was added.
    pub date: String,
    /// Highlighted text.
    pub quote: String,
}

/// Counts of clippings per header flavour seen by the extractor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// `Title (Author)` blocks.
    pub with_author: usize,
    /// Title-only blocks.
    pub without_author: usize,
}

impl ExtractionStats {
    /// Total clippings extracted.
    pub const fn total(&self) -> usize {
        self.with_author + self.without_author
    }
}

/// Size of a finished tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Distinct authors.
    pub authors: usize,
    /// Titles across all authors.
    pub titles: usize,
    /// Location keys across all titles.
    pub locations: usize,
    /// Quote entries in total.
    pub quotes: usize,
}
