//! Progress display for conversions

use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;

/// Progress bar over merged records, drawn on stderr.
///
/// Hidden when disabled or when stderr is not a terminal.
pub struct ConversionProgress {
    bar: ProgressBar,
}

impl ConversionProgress {
    /// Create a progress display.
    pub fn new(enabled: bool) -> Self {
        if !(enabled && std::io::stderr().is_terminal()) {
            return Self::hidden();
        }

        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} clippings")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self { bar }
    }

    /// A display that never draws.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record that `done` of `total` records have been merged.
    pub fn update(&self, done: usize, total: usize) {
        self.bar.set_length(to_u64(total));
        self.bar.set_position(to_u64(done));
    }

    /// Remove the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> (u64, Option<u64>) {
        (self.bar.position(), self.bar.length())
    }
}

fn to_u64(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_progress_still_tracks_position() {
        let progress = ConversionProgress::hidden();
        progress.update(3, 7);
        assert_eq!(progress.position(), (3, Some(7)));
        progress.finish();
    }
}
