//! The conversion entry point tying the stages together.
//!
//! text → [`preprocess`] → [`extract`] → [`normalize`] → [`ClippingsTree::insert`]
//! → [`ClippingsTree::substitute`] → [`ClippingsTree::pad_location_keys`]

use tracing::debug;

use crate::extract::{extract, preprocess};
use crate::normalize::normalize;
use crate::{
    ClippingsTree, ConvertConfig, ExtractionStats, Result, Substitution, SubstitutionReport,
};

/// Inputs to a conversion beyond the export text itself.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Sentinel author and output formatting.
    pub config: ConvertConfig,
    /// Renames applied after merging, before padding.
    pub substitutions: Vec<Substitution>,
}

impl ConvertOptions {
    /// Options with the given sentinel author and otherwise defaults.
    pub fn with_sentinel_author(author: impl Into<String>) -> Self {
        Self {
            config: ConvertConfig {
                sentinel_author: author.into(),
                ..ConvertConfig::default()
            },
            substitutions: Vec::new(),
        }
    }
}

/// Result of converting one export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// The padded tree, ready to serialize.
    pub tree: ClippingsTree,
    /// How many clippings each header flavour produced.
    pub extracted: ExtractionStats,
    /// Blocks that matched no grammar and were dropped.
    pub skipped: usize,
    /// What the substitution list did.
    pub substitution: SubstitutionReport,
}

/// Runs the extraction → normalization → merge → pad pipeline.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter.
    pub const fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Options this converter was built with.
    pub const fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a whole export.
    ///
    /// Any malformed matched record aborts the conversion; nothing partial is
    /// returned.
    pub fn convert(&self, raw: &str) -> Result<Conversion> {
        self.convert_with_progress(raw, |_, _| {})
    }

    /// Convert a whole export, reporting `(merged, total)` after each record.
    pub fn convert_with_progress<F>(&self, raw: &str, mut progress: F) -> Result<Conversion>
    where
        F: FnMut(usize, usize),
    {
        let text = preprocess(raw);
        let extraction = extract(&text);
        let extracted = extraction.stats();
        let skipped = extraction.skipped;
        let total = extraction.len();

        let sentinel = self.options.config.sentinel_author.as_str();
        let mut tree = ClippingsTree::new();
        for (idx, block) in extraction.into_ordered().enumerate() {
            tree.insert(normalize(&block, sentinel)?);
            progress(idx + 1, total);
        }

        let substitution = tree.substitute(&self.options.substitutions);
        tree.pad_location_keys();

        let stats = tree.stats();
        debug!(
            authors = stats.authors,
            titles = stats.titles,
            quotes = stats.quotes,
            "conversion complete"
        );

        Ok(Conversion {
            tree,
            extracted,
            skipped,
            substitution,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{BookRef, Error};

    const BLOCK: &str = "Pride and Prejudice (Jane Austen)\n- Highlight Loc. 150 | Added on Monday, March 4, 2019 9:15 AM\n\nIt is a truth universally acknowledged\n==========";

    #[test]
    fn test_progress_reports_every_record() {
        let text = format!("{BLOCK}\n{BLOCK}\n");
        let mut seen = Vec::new();

        let conversion = Converter::default()
            .convert_with_progress(&text, |done, total| seen.push((done, total)))
            .unwrap();

        assert_eq!(seen, vec![(1, 2), (2, 2)]);
        assert_eq!(conversion.extracted.with_author, 2);
        assert_eq!(conversion.tree.stats().quotes, 2);
    }

    #[test]
    fn test_format_error_aborts() {
        let bad = BLOCK.replace("March", "Smarch");
        let err = Converter::default().convert(&format!("{BLOCK}\n{bad}")).unwrap_err();
        assert!(matches!(err, Error::Format { field: "month", .. }));
    }

    #[test]
    fn test_substitution_runs_before_padding() {
        let text = concat!(
            "Book\n- Highlight Loc. 9 | Added on Monday, March 4, 2019 9:15 AM\n\nanonymous\n==========\n",
            "Book (Writer)\n- Highlight Loc. 1500 | Added on Monday, March 4, 2019 9:16 AM\n\nnamed\n==========\n",
        );
        let options = ConvertOptions {
            substitutions: vec![Substitution {
                from: BookRef::new("ZZNOAUTHOR", "Book"),
                to: BookRef::new("Writer", "Book"),
            }],
            ..ConvertOptions::default()
        };

        let conversion = Converter::new(options).convert(text).unwrap();

        assert_eq!(conversion.substitution.applied, 1);
        let locations = conversion.tree.locations("Writer", "Book").unwrap();
        let keys: Vec<&str> = locations.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["l0009", "l1500"]);
    }

    #[test]
    fn test_custom_sentinel_author() {
        let text = "Meditations\n- Highlight on Page 42 | Added on Friday, July 7, 2017, 11:02 PM\n\nWaste no more time.\n==========";
        let conversion = Converter::new(ConvertOptions::with_sentinel_author("Anonymous"))
            .convert(text)
            .unwrap();

        assert!(conversion.tree.locations("Anonymous", "Meditations").is_some());
        assert_eq!(
            conversion.tree.quotes("Anonymous", "Meditations", "p42").unwrap()[0].date,
            "20170707-2302"
        );
    }
}
