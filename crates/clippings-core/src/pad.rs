//! Zero-padding of location keys.
//!
//! `l163` sorts after `l1466` as a string. Padding every key of a title to the
//! width of its longest key (`l0163`) makes string order match numeric order.
//! Widths are chosen per title; keys are only ever compared within one title.

use tracing::debug;

use crate::{ClippingsTree, Locations};

impl ClippingsTree {
    /// Pad the location keys of every title. Idempotent.
    pub fn pad_location_keys(&mut self) {
        let mut rewritten = 0usize;
        for locations in self.titles_mut() {
            let padded = pad_locations(std::mem::take(locations));
            rewritten += 1;
            *locations = padded;
        }
        debug!(titles = rewritten, "padded location keys");
    }
}

/// Rewrite one title's keys to a common width, keeping every quote.
///
/// Keys that collide after padding (`l09` and `l9`) have their quotes
/// concatenated in key order.
pub fn pad_locations(locations: Locations) -> Locations {
    let width = locations
        .keys()
        .map(|key| key.chars().count())
        .max()
        .unwrap_or_default();

    let mut padded = Locations::new();
    for (key, entries) in locations {
        padded
            .entry(pad_key(&key, width))
            .or_default()
            .extend(entries);
    }
    padded
}

/// Insert zeros after the first character of `key` until it is `width` long.
pub fn pad_key(key: &str, width: usize) -> String {
    let len = key.chars().count();
    let mut chars = key.chars();
    let Some(prefix) = chars.next() else {
        return String::new();
    };
    if len >= width {
        return key.to_string();
    }

    let mut padded = String::with_capacity(width);
    padded.push(prefix);
    padded.extend(std::iter::repeat_n('0', width - len));
    padded.push_str(chars.as_str());
    padded
}
